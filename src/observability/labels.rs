use crate::DocumentType;
use metrics::{IntoLabels, Label, SharedString};

pub const FIELD: &str = "field";
pub const DOCUMENT_TYPE: &str = "document_type";

/// Ordered set of metric [Label]s attached to the counters of a rule.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Labels(Vec<Label>);

impl Labels {
    pub fn empty() -> Self {
        Labels(vec![])
    }

    pub fn new(
        labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Self {
        Labels(labels.iter().map(Label::from).collect())
    }

    /// Clone the labels, appending a single key-value pair
    pub fn with(
        &self,
        key: impl Into<SharedString>,
        value: impl Into<SharedString>,
    ) -> Labels {
        let mut labels = self.0.clone();
        labels.push(Label::new(key, value));
        Labels(labels)
    }

    /// The labels identifying a rule validating `field` as a `document_type`.
    pub fn for_rule(&self, field: &str, document_type: DocumentType) -> Labels {
        let document_type: &'static str = document_type.into();
        self.with(FIELD, field.to_string())
            .with(DOCUMENT_TYPE, document_type)
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_with_does_not_mutate() {
        let labels = Labels::new(&[("key_1", "value_1")]);

        let labels_2 = labels.with("key_2", "value_2");
        let label_list = labels_2.into_labels();
        assert!(label_list.contains(&Label::new("key_1", "value_1")));
        assert!(label_list.contains(&Label::new("key_2", "value_2")));

        let label_list = labels.into_labels();
        assert_eq!(label_list, vec![Label::new("key_1", "value_1")]);
    }

    #[test]
    fn test_rule_labels() {
        let labels = Labels::empty().for_rule("owner.cpf", DocumentType::BrazilianCpf);
        assert_eq!(
            labels.into_labels(),
            vec![
                Label::new("field", "owner.cpf"),
                Label::new("document_type", "brazilian_cpf"),
            ]
        );
    }
}
