//! Line-oriented terminal frontend.
//!
//! [`Presenter`] turns runtime events into text and [`StdinActionProvider`]
//! reads the player's choice from standard input. The provider flushes the
//! presenter before every prompt, so output stays in encounter order.
use std::io::Write;
use std::sync::Arc;

use async_trait::async_trait;
use combat_core::{CombatOutcome, PlayerAction, TurnOutcome};
use combat_runtime::{
    ActionProvider, Event, EventBus, Result, RuntimeError, SessionEvent, Topic, TurnEvent,
    TurnView,
};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;
use tokio::sync::broadcast::Receiver;
use tokio::sync::broadcast::error::TryRecvError;

/// Text for one event.
pub fn render(event: &Event) -> Vec<String> {
    match event {
        Event::Session(SessionEvent::Engaged { intro, .. }) => vec![intro.clone()],
        Event::Session(SessionEvent::Ended { outcome, .. }) => vec![outcome_banner(*outcome)],
        Event::Turn(TurnEvent::Started { status_lines, .. }) => {
            let mut lines = vec![String::new()];
            lines.extend(status_lines.iter().cloned());
            lines
        }
        Event::Turn(TurnEvent::Resolved { report }) => {
            let mut lines = report.log.clone();
            if report.outcome == TurnOutcome::Continue {
                lines.extend(report.status_block());
            }
            lines
        }
    }
}

fn outcome_banner(outcome: CombatOutcome) -> String {
    match outcome {
        CombatOutcome::Victory { reward } => {
            format!("Victory! The enemy ship is destroyed. +{reward} credits.")
        }
        CombatOutcome::Defeat => "Defeat. Your ship was lost.".to_owned(),
        CombatOutcome::Retreated => "You escaped the engagement.".to_owned(),
    }
}

/// Action menu lines.
pub fn menu() -> Vec<String> {
    PlayerAction::MENU
        .iter()
        .map(|(key, action)| format!("  {key}) {}", action.label()))
        .collect()
}

/// Buffered consumer of both event topics.
pub struct Presenter {
    session: Receiver<Event>,
    turns: Receiver<Event>,
}

impl Presenter {
    pub fn subscribe(events: &EventBus) -> Self {
        Self {
            session: events.subscribe(Topic::Session),
            turns: events.subscribe(Topic::Turn),
        }
    }

    /// Takes every pending event as text.
    ///
    /// Start cues come before turn output and end cues after it.
    pub fn drain(&mut self) -> Vec<String> {
        let mut head = Vec::new();
        let mut tail = Vec::new();
        for event in pending(&mut self.session) {
            match event {
                Event::Session(SessionEvent::Ended { .. }) => tail.extend(render(&event)),
                _ => head.extend(render(&event)),
            }
        }
        for event in pending(&mut self.turns) {
            head.extend(render(&event));
        }
        head.extend(tail);
        head
    }

    /// Prints every pending event to stdout.
    pub fn flush(&mut self) {
        let mut out = std::io::stdout().lock();
        for line in self.drain() {
            // A closed stdout leaves nothing to show; the encounter goes on.
            let _ = writeln!(out, "{line}");
        }
        let _ = out.flush();
    }
}

fn pending(rx: &mut Receiver<Event>) -> Vec<Event> {
    let mut events = Vec::new();
    loop {
        match rx.try_recv() {
            Ok(event) => events.push(event),
            Err(TryRecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "presenter fell behind, events dropped");
            }
            Err(TryRecvError::Empty | TryRecvError::Closed) => break,
        }
    }
    events
}

/// Prompts on stdout and reads one line per turn from stdin.
pub struct StdinActionProvider {
    presenter: Arc<Mutex<Presenter>>,
    input: Mutex<Lines<BufReader<Stdin>>>,
}

impl StdinActionProvider {
    pub fn new(presenter: Arc<Mutex<Presenter>>) -> Self {
        Self {
            presenter,
            input: Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
        }
    }
}

#[async_trait]
impl ActionProvider for StdinActionProvider {
    async fn provide_action(&self, _view: &TurnView) -> Result<PlayerAction> {
        self.presenter.lock().await.flush();

        {
            let mut out = std::io::stdout().lock();
            for line in menu() {
                let _ = writeln!(out, "{line}");
            }
            let _ = write!(out, "> ");
            let _ = out.flush();
        }

        let line = self
            .input
            .lock()
            .await
            .next_line()
            .await
            .map_err(|err| {
                tracing::error!("failed to read stdin: {err}");
                RuntimeError::ActionProviderChannelClosed
            })?
            .ok_or(RuntimeError::ActionProviderChannelClosed)?;

        let action = PlayerAction::from_input(&line);
        tracing::debug!(input = line.trim(), ?action, "player input");
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::{CombatantState, ResourcePool, SessionSummary, TurnReport};

    fn report(outcome: TurnOutcome) -> TurnReport {
        TurnReport {
            turn: 1,
            action: PlayerAction::Retreat,
            log: vec![
                "Attempting to retreat...".to_owned(),
                "Retreat successful!".to_owned(),
            ],
            outcome,
            player: CombatantState::new("ShiroWalker", 100, 100, 100),
            enemy: CombatantState::new("Sholen Raider", 100, 98, 60),
            resources: ResourcePool::charged(100, 50),
            unknown_modules: Vec::new(),
        }
    }

    #[test]
    fn menu_lists_the_four_actions() {
        assert_eq!(
            menu(),
            vec![
                "  1) Attack",
                "  2) Emergency Power",
                "  3) Scan Enemy",
                "  4) Retreat"
            ]
        );
    }

    #[test]
    fn final_turn_omits_the_status_block() {
        let lines = render(&Event::Turn(TurnEvent::Resolved {
            report: report(TurnOutcome::Retreated),
        }));
        assert_eq!(lines.len(), 2);

        let lines = render(&Event::Turn(TurnEvent::Resolved {
            report: report(TurnOutcome::Continue),
        }));
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[2], "Sholen Raider:");
    }

    #[test]
    fn drain_orders_cues_around_turns() {
        let bus = EventBus::with_capacity(8);
        let mut presenter = Presenter::subscribe(&bus);
        let finished = report(TurnOutcome::Retreated);

        bus.publish(SessionEvent::Engaged {
            pilot: "ShiroWalker".into(),
            enemy: "Sholen Raider".into(),
            class: "Frigate".into(),
            intro: "Combat initiated: Sholen Raider (Frigate)".into(),
        });
        bus.publish(TurnEvent::Resolved {
            report: finished.clone(),
        });
        bus.publish(SessionEvent::Ended {
            pilot: "ShiroWalker".into(),
            outcome: CombatOutcome::Retreated,
            summary: SessionSummary {
                outcome: CombatOutcome::Retreated,
                turns: 1,
                player: finished.player,
                enemy: finished.enemy,
                resources: finished.resources,
            },
        });

        assert_eq!(
            presenter.drain(),
            vec![
                "Combat initiated: Sholen Raider (Frigate)",
                "Attempting to retreat...",
                "Retreat successful!",
                "You escaped the engagement.",
            ]
        );
        assert!(presenter.drain().is_empty());
    }
}
