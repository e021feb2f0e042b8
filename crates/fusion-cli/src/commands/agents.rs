use fusion_core::agent::agent_profiles;

pub fn run() {
    for profile in agent_profiles() {
        println!(
            "{:<8} {:<20} {}",
            profile.participant.as_ref(),
            profile.role,
            profile.focus
        );
    }
}
