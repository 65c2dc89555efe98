use crate::classifier::interface::Prediction;
use crate::telemetry::interface::ReportEvent;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReportPolicy {
    /// Report the predicted class on every tick that has a prediction.
    TopClass,
    /// Report the predicted class only when its confidence reaches `min_confidence`.
    ConfidenceThreshold { min_confidence: f32 },
}

/// Decides what, if anything, to send for one prediction. Pure: there is no
/// de-duplication, so an unchanged prediction is reported again on every tick.
pub fn gate(
    policy: &ReportPolicy,
    prediction: &Prediction,
    labels: &[String],
) -> Option<ReportEvent> {
    let class = prediction.class_index;
    let label = labels.get(class)?;
    let confidence = prediction.confidence_of(class)?;

    let matched = match policy {
        ReportPolicy::TopClass => true,
        ReportPolicy::ConfidenceThreshold { min_confidence } => confidence >= *min_confidence,
    };

    matched.then(|| ReportEvent {
        label: label.clone(),
    })
}
