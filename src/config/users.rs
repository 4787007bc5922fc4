//! Customer identities for Discord users, loaded from environment variables.
//!
//! `CUSTOMER_USER_ID_<n>` / `CUSTOMER_NAME_<n>` pairs (n = 1, 2, ...) map a
//! Discord user ID to the customer name their bookings are filed under.
//! Users without a mapping sign in as the configured default customer.

use std::collections::HashMap;

/// Reads every consecutive `CUSTOMER_USER_ID_n` / `CUSTOMER_NAME_n` pair,
/// stopping at the first missing index.
///
/// # Returns
///
/// A `HashMap` mapping user ID strings to customer names.
#[must_use]
pub fn get_customer_names() -> HashMap<String, String> {
    customer_names_from(|key| std::env::var(key).ok())
}

/// Same as [`get_customer_names`] with a custom variable lookup.
#[must_use]
pub fn customer_names_from<F>(lookup: F) -> HashMap<String, String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut names = HashMap::new();
    for n in 1.. {
        let (Some(user_id), Some(name)) = (
            lookup(&format!("CUSTOMER_USER_ID_{n}")),
            lookup(&format!("CUSTOMER_NAME_{n}")),
        ) else {
            break;
        };
        names.insert(user_id.trim().to_string(), name.trim().to_string());
    }
    names
}

/// Customer name for `user_id`, or `default` when unmapped.
///
/// # Arguments
///
/// * `names` - Mapping from [`get_customer_names`]
/// * `user_id` - The Discord user ID to look up
/// * `default` - Fallback customer name
#[must_use]
pub fn resolve_customer<'a>(
    names: &'a HashMap<String, String>,
    user_id: &str,
    default: &'a str,
) -> &'a str {
    names.get(user_id).map_or(default, String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_reads_consecutive_pairs() {
        let names = customer_names_from(lookup(&[
            ("CUSTOMER_USER_ID_1", "111"),
            ("CUSTOMER_NAME_1", "Pavan"),
            ("CUSTOMER_USER_ID_2", " 222 "),
            ("CUSTOMER_NAME_2", "TechStart Inc"),
        ]));
        assert_eq!(names.len(), 2);
        assert_eq!(names.get("222").map(String::as_str), Some("TechStart Inc"));
    }

    #[test]
    fn test_stops_at_incomplete_pair() {
        let names = customer_names_from(lookup(&[
            ("CUSTOMER_USER_ID_1", "111"),
            ("CUSTOMER_NAME_1", "Pavan"),
            ("CUSTOMER_USER_ID_2", "222"),
            ("CUSTOMER_USER_ID_3", "333"),
            ("CUSTOMER_NAME_3", "Swim Team A"),
        ]));
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn test_resolve_customer_falls_back() {
        let names = customer_names_from(lookup(&[
            ("CUSTOMER_USER_ID_1", "111"),
            ("CUSTOMER_NAME_1", "Global Events"),
        ]));
        assert_eq!(resolve_customer(&names, "111", "Pavan"), "Global Events");
        assert_eq!(resolve_customer(&names, "999", "Pavan"), "Pavan");
    }
}
