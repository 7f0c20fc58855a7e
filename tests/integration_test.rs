use prizedraw::protocol::{ClientMessage, ServerMessage};
use prizedraw::state::AppState;
use prizedraw::types::{Prize, Role, Stage};
use prizedraw::ws::handlers::handle_message;
use std::sync::Arc;

async fn host(state: &Arc<AppState>, msg: ClientMessage) -> Option<ServerMessage> {
    handle_message(msg, &Role::Host, state).await
}

/// Unwrap a HostState reply into (stage, prizes)
fn expect_host_state(reply: Option<ServerMessage>) -> (Stage, Vec<Prize>) {
    match reply {
        Some(ServerMessage::HostState { stage, prizes, .. }) => (stage, prizes),
        other => panic!("Expected HostState, got {:?}", other),
    }
}

fn expect_error(reply: Option<ServerMessage>, expected_code: &str) -> String {
    match reply {
        Some(ServerMessage::Error { code, msg }) => {
            assert_eq!(code, expected_code, "unexpected error: {}", msg);
            msg
        }
        other => panic!("Expected Error {}, got {:?}", expected_code, other),
    }
}

fn sorted_numbers(prizes: &[Prize]) -> Vec<u32> {
    let mut nums: Vec<u32> = prizes.iter().filter_map(|p| p.assigned_number).collect();
    nums.sort();
    nums
}

async fn current_prizes(state: &Arc<AppState>) -> Vec<Prize> {
    state.controller.read().await.registry().prizes().to_vec()
}

/// End-to-end run through all four stages
#[tokio::test]
async fn test_full_draw_flow() {
    let state = Arc::new(AppState::with_seed(2024));
    let mut beamer_rx = state.broadcast.subscribe();

    // 1. Enter prizes
    let (stage, prizes) = expect_host_state(
        host(
            &state,
            ClientMessage::HostSubmitPrizes {
                text: "Travel voucher\nEarbuds\n\nPower bank\nMug\n".to_string(),
            },
        )
        .await,
    );
    assert_eq!(stage, Stage::PeopleInput);
    assert_eq!(prizes.len(), 4);

    // 2. Exclude the mug, move the voucher last, set people
    let mug = prizes[3].id.clone();
    let voucher = prizes[0].id.clone();
    host(&state, ClientMessage::HostToggleExclusion { prize_id: mug.clone() }).await;
    let (_, prizes) = expect_host_state(
        host(
            &state,
            ClientMessage::HostReorder {
                prize_id: voucher.clone(),
                position: 4,
            },
        )
        .await,
    );
    let order: Vec<_> = prizes.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(order, vec!["Earbuds", "Power bank", "Mug", "Travel voucher"]);

    host(
        &state,
        ClientMessage::HostSetPeople {
            count: "3".to_string(),
        },
    )
    .await;

    // 3. Assign numbers
    let (stage, prizes) = expect_host_state(host(&state, ClientMessage::HostStartSelection).await);
    assert_eq!(stage, Stage::SelectNumber);
    assert_eq!(sorted_numbers(&prizes), vec![1, 2, 3]);
    let mug_record = prizes.iter().find(|p| p.id == mug).unwrap();
    assert_eq!(mug_record.assigned_number, None);

    // Announcement is blocked until everything is claimed
    host(&state, ClientMessage::HostSelectNumber { number: 1 }).await;
    let msg = expect_error(
        host(&state, ClientMessage::HostStartAnnouncement).await,
        "GUARD_VIOLATION",
    );
    assert!(msg.contains("2 prize number(s)"));

    host(&state, ClientMessage::HostSelectNumber { number: 2 }).await;
    host(
        &state,
        ClientMessage::HostUpdateMemo {
            number: 2,
            memo: "Row 4".to_string(),
        },
    )
    .await;
    host(&state, ClientMessage::HostSelectNumber { number: 3 }).await;

    // 4. Announce in display order
    let (stage, _) = expect_host_state(host(&state, ClientMessage::HostStartAnnouncement).await);
    assert_eq!(stage, Stage::Announce);

    for _ in 0..3 {
        let next = match state.host_state().await {
            ServerMessage::HostState {
                next_to_announce, ..
            } => next_to_announce.expect("something left to announce"),
            other => panic!("Expected HostState, got {:?}", other),
        };
        expect_host_state(host(&state, ClientMessage::HostAnnounce { prize_id: next }).await);
    }

    let prizes = current_prizes(&state).await;
    assert!(prizes.iter().filter(|p| !p.excluded).all(|p| p.announced));
    assert_eq!(
        state.controller.read().await.registry().remaining_to_announce(),
        0
    );

    // The display received boards, the last one with every name revealed
    let mut last_board = None;
    while let Ok(msg) = beamer_rx.try_recv() {
        last_board = Some(msg);
    }
    match last_board {
        Some(ServerMessage::Board {
            entries,
            remaining_to_announce,
            ..
        }) => {
            assert_eq!(remaining_to_announce, 0);
            assert_eq!(entries.len(), 3);
            assert!(entries.iter().all(|e| e.prize_name.is_some()));
        }
        other => panic!("Expected Board, got {:?}", other),
    }
}

#[tokio::test]
async fn test_scenario_c_guard_violation_leaves_state_unchanged() {
    let state = Arc::new(AppState::with_seed(7));
    host(
        &state,
        ClientMessage::HostSubmitPrizes {
            text: "A\nB\nC".to_string(),
        },
    )
    .await;
    let c = current_prizes(&state).await[2].id.clone();
    host(&state, ClientMessage::HostToggleExclusion { prize_id: c }).await;
    host(
        &state,
        ClientMessage::HostSetPeople {
            count: "1".to_string(),
        },
    )
    .await;
    let before = current_prizes(&state).await;

    let msg = expect_error(
        host(&state, ClientMessage::HostStartSelection).await,
        "GUARD_VIOLATION",
    );
    assert!(msg.contains("(1)"));
    assert!(msg.contains("(2)"));

    assert_eq!(current_prizes(&state).await, before);
    assert_eq!(
        state.controller.read().await.stage(),
        Stage::PeopleInput
    );
}

#[tokio::test]
async fn test_scenario_d_deselect_resets_memo() {
    let state = Arc::new(AppState::with_seed(11));
    host(
        &state,
        ClientMessage::HostSubmitPrizes {
            text: "A\nB\nC".to_string(),
        },
    )
    .await;
    host(
        &state,
        ClientMessage::HostSetPeople {
            count: "3".to_string(),
        },
    )
    .await;
    host(&state, ClientMessage::HostStartSelection).await;

    host(&state, ClientMessage::HostSelectNumber { number: 1 }).await;
    host(
        &state,
        ClientMessage::HostUpdateMemo {
            number: 1,
            memo: "seat 12".to_string(),
        },
    )
    .await;
    let (_, prizes) =
        expect_host_state(host(&state, ClientMessage::HostDeselectNumber { number: 1 }).await);

    let record = prizes
        .iter()
        .find(|p| p.assigned_number == Some(1))
        .unwrap();
    assert!(!record.selected);
    assert_eq!(record.memo, "");
}

#[tokio::test]
async fn test_validation_errors() {
    let state = Arc::new(AppState::with_seed(1));

    expect_error(
        host(
            &state,
            ClientMessage::HostSubmitPrizes {
                text: "\n   \n".to_string(),
            },
        )
        .await,
        "VALIDATION_ERROR",
    );
    assert_eq!(state.controller.read().await.stage(), Stage::PrizeInput);

    host(
        &state,
        ClientMessage::HostSubmitPrizes {
            text: "A".to_string(),
        },
    )
    .await;
    expect_error(
        host(
            &state,
            ClientMessage::HostSetPeople {
                count: "lots".to_string(),
            },
        )
        .await,
        "VALIDATION_ERROR",
    );
    expect_error(
        host(
            &state,
            ClientMessage::HostSetPeople {
                count: "-2".to_string(),
            },
        )
        .await,
        "VALIDATION_ERROR",
    );
    assert_eq!(state.controller.read().await.number_of_people(), 0);

    expect_error(
        host(
            &state,
            ClientMessage::HostToggleExclusion {
                prize_id: "missing".to_string(),
            },
        )
        .await,
        "NOT_FOUND",
    );
}

#[tokio::test]
async fn test_beamer_cannot_mutate() {
    let state = Arc::new(AppState::with_seed(1));

    let reply = handle_message(
        ClientMessage::HostSubmitPrizes {
            text: "A".to_string(),
        },
        &Role::Beamer,
        &state,
    )
    .await;
    expect_error(reply, "UNAUTHORIZED");
    assert!(state.controller.read().await.registry().is_empty());

    let reply = handle_message(ClientMessage::RequestState, &Role::Beamer, &state).await;
    assert!(matches!(reply, Some(ServerMessage::Board { .. })));
}

#[tokio::test]
async fn test_reset_returns_to_prize_input() {
    let state = Arc::new(AppState::with_seed(5));
    host(
        &state,
        ClientMessage::HostSubmitPrizes {
            text: "A\nB".to_string(),
        },
    )
    .await;
    host(
        &state,
        ClientMessage::HostSetPeople {
            count: "2".to_string(),
        },
    )
    .await;
    host(&state, ClientMessage::HostStartSelection).await;

    match host(&state, ClientMessage::HostReset).await {
        Some(ServerMessage::HostState {
            stage,
            prizes,
            number_of_people,
            in_progress,
            ..
        }) => {
            assert_eq!(stage, Stage::PrizeInput);
            assert!(prizes.is_empty());
            assert_eq!(number_of_people, 0);
            assert!(!in_progress);
        }
        other => panic!("Expected HostState, got {:?}", other),
    }
}

#[tokio::test]
async fn test_wrong_stage_commands_are_rejected() {
    let state = Arc::new(AppState::with_seed(5));

    expect_error(
        host(&state, ClientMessage::HostStartSelection).await,
        "GUARD_VIOLATION",
    );
    expect_error(
        host(&state, ClientMessage::HostSelectNumber { number: 1 }).await,
        "GUARD_VIOLATION",
    );
    assert_eq!(state.controller.read().await.stage(), Stage::PrizeInput);
}
