use fusion_core::score::intelligence_score;

pub fn run(pulses: usize, active: usize) {
    println!("{}", intelligence_score(pulses, active));
}
