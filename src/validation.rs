// Required-field presence is the only validation the form performs.

pub fn validate_required(value: &str) -> bool {
    !value.trim().is_empty()
}
