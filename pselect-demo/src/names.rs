//! Synthetic options: random full names with UUID values.

use pselect::SelectOption;
use rand::Rng;
use uuid::Builder;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Alice", "Amara", "Andre", "Beatriz", "Bob", "Carol", "Chen", "Dalia", "Daniel",
    "Elena", "Emeka", "Farah", "Felix", "Grace", "Hana", "Hugo", "Ines", "Ivan", "Jamal", "Jin",
    "Karin", "Kofi", "Lena", "Luis", "Maya", "Mateo", "Nadia", "Noah", "Olga", "Omar", "Priya",
    "Quinn", "Rosa", "Sami", "Sofia", "Tariq", "Uma", "Victor", "Wen", "Ximena", "Yusuf", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Abara", "Andersen", "Baptiste", "Carvalho", "Chowdhury", "Dubois", "Eriksen", "Fischer",
    "García", "Haddad", "Ivanova", "Jansen", "Kowalski", "Lindqvist", "Mensah", "Moreau",
    "Nakamura", "Novak", "Okafor", "Olsen", "Petrov", "Quispe", "Rossi", "Santos", "Schmidt",
    "Tanaka", "Usman", "Varga", "Walsh", "Xu", "Yilmaz", "Zhang",
];

fn full_name(rng: &mut impl Rng) -> String {
    let first = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.random_range(0..LAST_NAMES.len())];
    format!("{} {}", first, last)
}

/// Generate `count` options labelled with full names. Labels repeat; values
/// are v4 UUID strings drawn from `rng`, so a seeded rng gives a stable list.
pub fn generate_options(count: usize, rng: &mut impl Rng) -> Vec<SelectOption> {
    (0..count)
        .map(|_| {
            let id = Builder::from_random_bytes(rng.random()).into_uuid();
            SelectOption::new(id.to_string(), full_name(rng))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_generates_requested_count_with_unique_values() {
        let mut rng = StdRng::seed_from_u64(1);
        let options = generate_options(2_000, &mut rng);
        assert_eq!(options.len(), 2_000);

        let values: HashSet<_> = options.iter().map(|o| o.value().clone()).collect();
        assert_eq!(values.len(), 2_000);
    }

    #[test]
    fn test_same_seed_same_options() {
        let a = generate_options(20, &mut StdRng::seed_from_u64(42));
        let b = generate_options(20, &mut StdRng::seed_from_u64(42));
        let labels = |opts: &[SelectOption]| -> Vec<String> {
            opts.iter().map(|o| o.label().to_string()).collect()
        };
        assert_eq!(a, b);
        assert_eq!(labels(&a), labels(&b));
    }

    #[test]
    fn test_labels_are_first_and_last_name() {
        let options = generate_options(10, &mut StdRng::seed_from_u64(3));
        for option in &options {
            let mut parts = option.label().split(' ');
            assert!(FIRST_NAMES.contains(&parts.next().unwrap()));
            assert!(LAST_NAMES.contains(&parts.next().unwrap()));
        }
    }
}
