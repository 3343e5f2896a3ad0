use crate::Labels;
use metrics::{counter, Counter};

pub struct RuleMetrics {
    pub checks: Counter,
    pub rejections: Counter,
}

impl RuleMetrics {
    pub fn new(labels: &Labels) -> Self {
        RuleMetrics {
            checks: counter!("document_validation.checks", labels.clone()),
            rejections: counter!("document_validation.rejections", labels.clone()),
        }
    }
}
