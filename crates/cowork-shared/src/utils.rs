//! Utility functions

/// Mask the local part of an email for logs: `jane.doe@x.com` -> `ja***@x.com`.
pub fn mask_email(email: &str) -> String {
    match email.find('@') {
        Some(at_pos) => {
            let (local, domain) = email.split_at(at_pos);
            let keep = if local.chars().count() <= 2 { 1 } else { 2 };
            let visible: String = local.chars().take(keep).collect();
            format!("{}***{}", visible, domain)
        }
        None => "***".to_string(),
    }
}

/// Uppercase the first character and leave the rest untouched (`kochi` -> `Kochi`).
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
