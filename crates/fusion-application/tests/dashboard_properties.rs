use fusion_application::Dashboard;
use fusion_core::config::DashboardSettings;
use fusion_core::pulse::{FEED_CAPACITY, Trend};
use fusion_core::workflow::{StepStatus, StepTransition};
use fusion_core::{AGENTS, Participant};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn settings(seed: u64) -> DashboardSettings {
    DashboardSettings {
        seed: Some(seed),
        seed_thread: true,
        seed_pulses: true,
    }
}

fn counts(dashboard: &Dashboard) -> Vec<usize> {
    [
        Participant::Claude,
        Participant::Gemini,
        Participant::ChatGpt,
        Participant::User,
        Participant::Orchestrator,
    ]
    .into_iter()
    .map(|p| dashboard.log(p).len())
    .collect()
}

#[test]
fn test_submit_appends_two_messages_per_log() {
    let mut dashboard = Dashboard::from_settings(&settings(1));

    for prompt in ["first idea", "second idea", "a third, longer idea to explore"] {
        let before = counts(&dashboard);
        dashboard.submit(prompt).unwrap();
        let after = counts(&dashboard);

        assert_eq!(after[0], before[0] + 2);
        assert_eq!(after[1], before[1] + 2);
        assert_eq!(after[2], before[2] + 2);
        assert_eq!(after[3], 0, "user log stays empty");
        assert_eq!(after[4], before[4] + 2);
    }
}

#[test]
fn test_blank_submit_is_a_no_op() {
    let mut dashboard = Dashboard::from_settings(&settings(2));
    let before = counts(&dashboard);
    let pulses_before = dashboard.pulses().len();

    assert!(dashboard.submit("").is_err());
    assert!(dashboard.submit("   ").is_err());

    assert_eq!(counts(&dashboard), before);
    assert_eq!(dashboard.pulses().len(), pulses_before);
}

#[test]
fn test_feed_never_exceeds_capacity() {
    let mut dashboard = Dashboard::from_settings(&settings(3));
    for i in 0..25 {
        dashboard.submit(&format!("prompt number {i}")).unwrap();
        assert!(dashboard.pulses().len() <= FEED_CAPACITY);
    }
    assert_eq!(dashboard.pulses().len(), FEED_CAPACITY);
}

#[test]
fn test_tick_never_leaves_head_down() {
    for seed in 0..40 {
        let mut dashboard = Dashboard::from_settings(&settings(seed));
        dashboard.submit("volatile signal").unwrap();

        let head = dashboard.tick().unwrap();
        assert_ne!(head.trend, Trend::Down);
        assert!(head.delta.contains('+'));
        assert!(head.signal.contains("recalibrated"));
        assert_eq!(dashboard.pulses().head().unwrap(), &head);
    }
}

#[test]
fn test_tick_leaves_rest_of_feed_untouched() {
    let mut dashboard = Dashboard::from_settings(&settings(9));
    dashboard.submit("something").unwrap();
    let tail_before: Vec<_> = dashboard.pulses().iter().skip(1).cloned().collect();

    dashboard.tick();

    let tail_after: Vec<_> = dashboard.pulses().iter().skip(1).cloned().collect();
    assert_eq!(tail_before, tail_after);
}

#[test]
fn test_workflow_run_visits_steps_in_order() {
    let mut dashboard = Dashboard::from_settings(&settings(4));
    let transitions = dashboard.run_workflow_instant();

    let expected: Vec<StepTransition> = ["ingest", "research", "plan", "execute"]
        .into_iter()
        .flat_map(|id| {
            [
                StepTransition::Started {
                    step_id: id.to_string(),
                },
                StepTransition::Completed {
                    step_id: id.to_string(),
                },
            ]
        })
        .collect();
    assert_eq!(transitions, expected);
    assert!(
        dashboard
            .workflow()
            .steps()
            .iter()
            .all(|s| s.status == StepStatus::Done)
    );
}

#[test]
fn test_score_baseline_and_growth() {
    let empty = DashboardSettings {
        seed: Some(5),
        seed_thread: false,
        seed_pulses: false,
    };
    let mut dashboard = Dashboard::from_settings(&empty);
    assert_eq!(dashboard.score(), 42);

    dashboard.submit("grow").unwrap();
    assert_eq!(dashboard.score(), 51);

    dashboard.advance_workflow();
    assert_eq!(dashboard.score(), 58);
}

#[test]
fn test_launch_q3_roadmap_example() {
    let mut dashboard = Dashboard::from_settings(&settings(6));
    dashboard.submit("Launch Q3 roadmap").unwrap();

    for agent_id in AGENTS {
        let log = dashboard.log(agent_id);
        let user_message = &log[log.len() - 2];
        let reply = &log[log.len() - 1];
        assert_eq!(user_message.from, Participant::User);
        assert_eq!(user_message.content, "Launch Q3 roadmap");
        assert_eq!(reply.from, agent_id);
        assert!(reply.content.contains("Launch Q3 roadmap"));
    }

    let head = dashboard.pulses().head().unwrap();
    assert!(head.title.starts_with("Signal unlocked by \"Launch Q3 roadmap\""));
}

#[test]
fn test_same_seed_same_thread() {
    let quiet = DashboardSettings {
        seed: None,
        seed_thread: false,
        seed_pulses: false,
    };
    let mut a = Dashboard::with_rng(StdRng::seed_from_u64(77), &quiet);
    let mut b = Dashboard::with_rng(StdRng::seed_from_u64(77), &quiet);

    for prompt in ["one", "two"] {
        let ra = a.submit(prompt).unwrap();
        let rb = b.submit(prompt).unwrap();
        let texts_a: Vec<_> = ra.agent_replies.iter().map(|m| &m.content).collect();
        let texts_b: Vec<_> = rb.agent_replies.iter().map(|m| &m.content).collect();
        assert_eq!(texts_a, texts_b);
        assert_eq!(ra.orchestrator_reply.content, rb.orchestrator_reply.content);
        assert_eq!(ra.pulse.title, rb.pulse.title);
        assert_eq!(ra.pulse.delta, rb.pulse.delta);
    }
}

#[test]
fn test_snapshot_serializes() {
    let mut dashboard = Dashboard::from_settings(&settings(8));
    dashboard.submit("serialize me").unwrap();

    let json = serde_json::to_value(dashboard.snapshot()).unwrap();
    assert_eq!(json["logs"].as_array().unwrap().len(), 5);
    assert_eq!(json["logs"][0]["participant"], "claude");
    assert_eq!(json["workflow"]["steps"][0]["status"], "idle");
}
