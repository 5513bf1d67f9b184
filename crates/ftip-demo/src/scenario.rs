#![forbid(unsafe_code)]

//! Scenario files and their replay.
//!
//! A scenario describes one trigger/panel pair in a viewport and a list of
//! timed steps:
//!
//! ```json
//! {
//!   "config": { "trigger": "click", "placement": "top" },
//!   "trigger": { "top": 100, "left": 100, "width": 40, "height": 20 },
//!   "panel": { "width": 80, "height": 30 },
//!   "viewport": { "width": 800, "height": 600 },
//!   "steps": [
//!     { "at_ms": 0, "action": "trigger", "event": "click" },
//!     { "at_ms": 10, "action": "scroll", "dy": 90 }
//!   ]
//! }
//! ```
//!
//! Each step advances the virtual clock to `at_ms`, fires any due timer,
//! applies the action and then runs the post-layout hook, like a host frame.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::Context;
use ftip_core::event::{LayoutEvent, TriggerEvent};
use ftip_core::geometry::{Rect, Size};
use ftip_harness::Fixture;
use ftip_place::PositionResult;
use ftip_runtime::{Transition, TooltipConfig};
use serde::{Deserialize, Serialize};

const BUILTIN: &str = include_str!("../scenarios/hover.json");

/// A replayable scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub config: TooltipConfig,
    pub trigger: Rect,
    pub panel: Size,
    pub viewport: Size,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One timed step.
#[derive(Debug, Clone, Deserialize)]
pub struct Step {
    #[serde(default)]
    pub at_ms: u64,
    #[serde(flatten)]
    pub action: Action,
}

/// What happens at a step.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Action {
    /// Deliver a trigger event.
    Trigger { event: TriggerEvent },
    /// Only let time pass.
    Wait,
    /// Scroll the page; every node moves by `(-dy, -dx)`.
    Scroll {
        #[serde(default)]
        dy: f64,
        #[serde(default)]
        dx: f64,
    },
    /// Resize the viewport.
    Resize { width: f64, height: f64 },
    /// Supply the open flag (manual mode).
    SetOpen { open: bool },
    SetDisabled { disabled: bool },
    /// Tear the tooltip down.
    Unmount,
}

impl Action {
    fn name(&self) -> &'static str {
        match self {
            Self::Trigger { .. } => "trigger",
            Self::Wait => "wait",
            Self::Scroll { .. } => "scroll",
            Self::Resize { .. } => "resize",
            Self::SetOpen { .. } => "set-open",
            Self::SetDisabled { .. } => "set-disabled",
            Self::Unmount => "unmount",
        }
    }
}

/// Output for one step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    pub at_ms: u64,
    pub action: &'static str,
    /// Transitions reported during the step, in order.
    pub transitions: Vec<&'static str>,
    pub open: bool,
    pub position: Option<PositionReport>,
    /// Next time the host must tick, relative to the start.
    pub next_deadline_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionReport {
    pub top: f64,
    pub left: f64,
    pub placement: String,
}

impl From<PositionResult> for PositionReport {
    fn from(pos: PositionResult) -> Self {
        Self {
            top: pos.top,
            left: pos.left,
            placement: pos.placement.to_string(),
        }
    }
}

impl Scenario {
    /// The scenario used when no file is given.
    pub fn builtin() -> anyhow::Result<Self> {
        Self::from_json(BUILTIN).context("built-in scenario is invalid")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing scenario {}", path.display()))
    }

    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Replay every step and collect the reports.
    pub fn run(&self) -> anyhow::Result<Vec<StepReport>> {
        let fx = Fixture::empty(self.viewport);
        fx.set_trigger(self.trigger);
        fx.set_panel_size(self.panel.width, self.panel.height);
        let mut tip = fx.mount(self.config.clone())?;
        let start = fx.clock.at_ms(0);

        tracing::info!(steps = self.steps.len(), mode = %self.config.trigger, "replaying scenario");

        let mut reports = Vec::with_capacity(self.steps.len());
        for step in &self.steps {
            let now = fx.clock.set_ms(step.at_ms);
            let mut transitions = Vec::new();
            transitions.extend(tip.tick(now));

            let t = match step.action {
                Action::Trigger { event } => tip.handle_event(event, now),
                Action::Wait => None,
                Action::Scroll { dy, dx } => {
                    fx.measure.scroll_by(dy, dx);
                    tip.on_layout_event(LayoutEvent::Scroll);
                    None
                }
                Action::Resize { width, height } => {
                    fx.measure.set_viewport(Size::new(width, height));
                    tip.on_layout_event(LayoutEvent::Resize);
                    None
                }
                Action::SetOpen { open } => tip.set_open(open),
                Action::SetDisabled { disabled } => tip.set_disabled(disabled),
                Action::Unmount => {
                    tip.unmount();
                    None
                }
            };
            transitions.extend(t);
            tip.on_frame();

            reports.push(StepReport {
                at_ms: step.at_ms,
                action: step.action.name(),
                transitions: transitions.into_iter().map(transition_name).collect(),
                open: tip.is_open(),
                position: tip.position().map(PositionReport::from),
                next_deadline_ms: tip.next_deadline().map(|d| millis_since(start, d)),
            });
        }
        Ok(reports)
    }
}

fn transition_name(t: Transition) -> &'static str {
    match t {
        Transition::Opened => "opened",
        Transition::Closed => "closed",
        Transition::CloseRequested => "close-requested",
    }
}

fn millis_since(start: Instant, at: Instant) -> u64 {
    u64::try_from(at.saturating_duration_since(start).as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_hover_scenario() {
        let reports = Scenario::builtin().unwrap().run().unwrap();
        assert_eq!(reports[0].action, "trigger");
        assert!(!reports[0].open);
        assert_eq!(reports[0].next_deadline_ms, Some(500));

        let opened = reports
            .iter()
            .find(|r| r.transitions.contains(&"opened"))
            .expect("opens");
        assert_eq!(opened.at_ms, 500);
        assert_eq!(
            opened.position,
            Some(PositionReport {
                top: 62.0,
                left: 80.0,
                placement: "top".into(),
            })
        );
        assert!(!reports.last().unwrap().open);
    }

    #[test]
    fn click_then_scroll_flips() {
        let scenario = Scenario::from_json(
            r#"{
                "config": { "trigger": "click" },
                "trigger": { "top": 100, "left": 100, "width": 40, "height": 20 },
                "panel": { "width": 80, "height": 30 },
                "viewport": { "width": 800, "height": 600 },
                "steps": [
                    { "at_ms": 0, "action": "trigger", "event": "click" },
                    { "at_ms": 16, "action": "scroll", "dy": 90 },
                    { "at_ms": 32, "action": "trigger", "event": "click" }
                ]
            }"#,
        )
        .unwrap();
        let reports = scenario.run().unwrap();
        assert_eq!(reports[0].transitions, vec!["opened"]);
        assert_eq!(reports[1].position.as_ref().unwrap().placement, "bottom");
        assert_eq!(reports[1].position.as_ref().unwrap().top, 38.0);
        assert_eq!(reports[2].transitions, vec!["closed"]);
        assert_eq!(reports[2].position, None);
    }

    #[test]
    fn unmount_step_silences_later_steps() {
        let scenario = Scenario::from_json(
            r#"{
                "trigger": { "top": 100, "left": 100, "width": 40, "height": 20 },
                "panel": { "width": 80, "height": 30 },
                "viewport": { "width": 800, "height": 600 },
                "steps": [
                    { "at_ms": 0, "action": "trigger", "event": "pointer-enter" },
                    { "at_ms": 100, "action": "unmount" },
                    { "at_ms": 1000, "action": "wait" }
                ]
            }"#,
        )
        .unwrap();
        let reports = scenario.run().unwrap();
        assert!(reports.iter().all(|r| r.transitions.is_empty()));
        assert_eq!(reports[2].next_deadline_ms, None);
    }

    #[test]
    fn rejects_unknown_action() {
        let err = Scenario::from_json(
            r#"{
                "trigger": { "top": 0, "left": 0, "width": 1, "height": 1 },
                "panel": { "width": 1, "height": 1 },
                "viewport": { "width": 10, "height": 10 },
                "steps": [{ "at_ms": 0, "action": "teleport" }]
            }"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn invalid_config_is_an_error() {
        let scenario = Scenario::from_json(
            r#"{
                "config": { "boundary_padding": -1 },
                "trigger": { "top": 0, "left": 0, "width": 1, "height": 1 },
                "panel": { "width": 1, "height": 1 },
                "viewport": { "width": 10, "height": 10 }
            }"#,
        )
        .unwrap();
        let err = scenario.run().unwrap_err();
        assert!(err.to_string().contains("boundary padding"));
    }

    #[test]
    fn report_serializes_as_one_line() {
        let report = StepReport {
            at_ms: 5,
            action: "wait",
            transitions: vec![],
            open: false,
            position: None,
            next_deadline_ms: None,
        };
        let line = serde_json::to_string(&report).unwrap();
        assert!(!line.contains('\n'));
        assert!(line.contains(r#""action":"wait""#));
    }
}
