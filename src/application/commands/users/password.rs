pub(super) const MIN_PASSWORD_LENGTH: usize = 8;

/// Every rule the password breaks, in a stable order.
pub(super) fn password_problems(password: &str, username: &str) -> Vec<String> {
    let mut problems = Vec::new();

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        problems.push(format!(
            "this password is too short, it must contain at least {MIN_PASSWORD_LENGTH} characters"
        ));
    }

    if !password.is_empty() && password.chars().all(|c| c.is_ascii_digit()) {
        problems.push("this password is entirely numeric".to_string());
    }

    let username = username.trim().to_lowercase();
    if !username.is_empty() && password.to_lowercase().contains(&username) {
        problems.push("the password is too similar to the username".to_string());
    }

    problems
}
