use afl::fuzz;
use dd_br_docs::{cnpj_is_valid, cpf_is_valid, DocumentRuleConfig, RuleSet};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let input = std::str::from_utf8(bytes).ok()?;
    run_fuzz(input);
    Some(())
}

fn run_fuzz(input: &str) {
    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Input len: {:?}", input.len());
    }

    let cpf_valid = cpf_is_valid(input);
    let cnpj_valid = cnpj_is_valid(input);

    #[cfg(feature = "manual_test")]
    {
        println!("CPF: {}", cpf_valid);
        println!("CNPJ: {}", cnpj_valid);
    }

    if cpf_valid {
        let digits: Vec<char> = input.chars().filter(|c| c.is_numeric()).collect();
        assert_eq!(digits.len(), 11, "valid CPF without 11 digits: {input:?}");
        assert!(digits.iter().all(char::is_ascii_digit));
        assert!(digits.iter().any(|c| *c != digits[0]));
    }

    if cnpj_valid {
        let chars: Vec<char> = input
            .chars()
            .filter(|c| c.is_alphanumeric())
            .collect();
        assert_eq!(chars.len(), 14, "valid CNPJ without 14 chars: {input:?}");
        assert!(chars.iter().all(char::is_ascii_alphanumeric));
        assert!(chars[12].is_ascii_digit() && chars[13].is_ascii_digit());
    }

    // The rule adapter must agree with the predicates
    let rule_set = RuleSet::new(&[
        DocumentRuleConfig::cpf("cpf"),
        DocumentRuleConfig::cnpj("cnpj"),
    ])
    .unwrap();
    let errors = rule_set.validate(&std::collections::BTreeMap::from([
        ("cpf".to_string(), input.to_string()),
        ("cnpj".to_string(), input.to_string()),
    ]));
    assert_eq!(
        errors.len(),
        usize::from(!cpf_valid) + usize::from(!cnpj_valid)
    );
}
