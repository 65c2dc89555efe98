use crate::classifier::interface::Prediction;
use crate::config::Config;
use crate::sampling_loop::report::gate;
use crate::sampling_loop::tick::TickOutcome;
use crate::sampling_loop::view::{ClassStatus, View};
use crate::telemetry::interface::ReportEvent;

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSession {
    pub class: usize,
    pub appended: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub loop_active: bool,
    pub training: Option<TrainingSession>,
    pub labels: Vec<String>,
    pub class_counts: Vec<usize>,
    pub last_prediction: Option<Prediction>,
}

impl State {
    pub fn training_target(&self) -> Option<usize> {
        self.training.as_ref().map(|session| session.class)
    }
}

#[derive(Debug)]
pub enum Event {
    StartRequested,
    StopRequested,
    TrainPressed { class: usize, label: Option<String> },
    TrainReleased,
    LabelEdited { class: usize, label: String },
    Tick,
    TickDone(TickOutcome),
    Shutdown,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    PlayCamera,
    PauseCamera,
    StartTicker,
    StopTicker,
    RunTick { training_target: Option<usize> },
    Render(View),
    Report(ReportEvent),
}

pub fn default_label(class: usize) -> String {
    format!("Train {}", class)
}

pub fn init(config: &Config) -> (State, Vec<Effect>) {
    let state = State {
        loop_active: false,
        training: None,
        labels: (0..config.num_classes).map(default_label).collect(),
        class_counts: vec![0; config.num_classes],
        last_prediction: None,
    };
    let effects = vec![Effect::Render(view(&state))];
    (state, effects)
}

pub fn transition(config: &Config, state: State, event: Event) -> (State, Vec<Effect>) {
    let mut state = state;

    match event {
        // Restarting while running replaces the tick subscription instead of adding one.
        Event::StartRequested => {
            state.loop_active = true;
            let effects = vec![
                Effect::PlayCamera,
                Effect::StartTicker,
                Effect::Render(view(&state)),
            ];
            (state, effects)
        }
        Event::StopRequested => {
            if !state.loop_active {
                return (state, vec![]);
            }
            state.loop_active = false;
            let effects = vec![
                Effect::StopTicker,
                Effect::PauseCamera,
                Effect::Render(view(&state)),
            ];
            (state, effects)
        }

        Event::TrainPressed { class, label } => {
            if class >= config.num_classes {
                return (state, vec![]);
            }
            if let Some(label) = label.map(|l| l.trim().to_string()) {
                state.labels[class] = if label.is_empty() {
                    default_label(class)
                } else {
                    label
                };
            }
            state.training = Some(TrainingSession { class, appended: 0 });
            let effects = vec![Effect::Render(view(&state))];
            (state, effects)
        }
        Event::TrainReleased => {
            if state.training.take().is_none() {
                return (state, vec![]);
            }
            let effects = vec![Effect::Render(view(&state))];
            (state, effects)
        }
        Event::LabelEdited { class, label } => {
            if class >= config.num_classes {
                return (state, vec![]);
            }
            let label = label.trim();
            state.labels[class] = if label.is_empty() {
                default_label(class)
            } else {
                label.to_string()
            };
            let effects = vec![Effect::Render(view(&state))];
            (state, effects)
        }

        // Main loop
        Event::Tick => {
            if !state.loop_active {
                return (state, vec![]);
            }
            let training_target = state.training_target();
            (state, vec![Effect::RunTick { training_target }])
        }
        Event::TickDone(outcome) => tick_done(config, state, outcome),

        Event::Shutdown => {
            state.loop_active = false;
            state.training = None;
            (state, vec![Effect::StopTicker, Effect::PauseCamera])
        }
    }
}

fn tick_done(config: &Config, mut state: State, outcome: TickOutcome) -> (State, Vec<Effect>) {
    if !outcome.frame_available {
        return (state, vec![]);
    }

    if let (Some(appended), Some(session)) = (outcome.appended, state.training.as_mut()) {
        if appended == session.class {
            session.appended += 1;
            if session.appended >= config.training_quota {
                state.training = None;
            }
        }
    }

    state.class_counts = outcome.class_counts;
    state.last_prediction = outcome.prediction;

    let mut effects = vec![Effect::Render(view(&state))];

    let report = state
        .last_prediction
        .as_ref()
        .and_then(|prediction| gate(&config.report_policy, prediction, &state.labels));
    if let Some(report) = report {
        effects.push(Effect::Report(report));
    }

    (state, effects)
}

pub fn view(state: &State) -> View {
    let classes = state
        .labels
        .iter()
        .enumerate()
        .map(|(class, label)| {
            let prediction = state.last_prediction.as_ref();
            ClassStatus {
                label: label.clone(),
                example_count: state.class_counts.get(class).copied().unwrap_or(0),
                confidence: prediction.and_then(|p| p.confidence_of(class)),
                selected: prediction.is_some_and(|p| p.class_index == class),
            }
        })
        .collect();

    View {
        loop_active: state.loop_active,
        training: state.training_target(),
        classes,
    }
}
