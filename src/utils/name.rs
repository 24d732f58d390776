/// Joins the non-empty name parts with a space.
pub fn full_name(first: Option<&str>, last: Option<&str>) -> Option<String> {
    let name = [first, last]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    match name.is_empty() {
        true => None,
        false => Some(name),
    }
}

#[cfg(test)]
mod tests {
    use super::full_name;

    #[test]
    fn joins_name_parts() {
        assert_eq!(full_name(Some("Aisha"), Some("Khan")), Some(String::from("Aisha Khan")));
        assert_eq!(full_name(None, Some("Khan")), Some(String::from("Khan")));
        assert_eq!(full_name(Some(""), None), None);
    }
}
