/// Expands to the current source line as a `&'static str`.
///
/// Unlike `line!()`, the result can be spliced into other string literals with
/// `concat!`, e.g. to build assertion messages at compile time.
///
/// ```
/// use t0_utils::line_str;
///
/// assert_eq!(line_str!(), line!().to_string());
///
/// const WHERE: &str = concat!(file!(), ":", line_str!());
/// assert!(WHERE.contains(':'));
/// ```
#[macro_export]
macro_rules! line_str {
    () => {
        concat!(line!())
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn line_str_is_decimal() {
        let line = line_str!();
        assert!(!line.is_empty());
        assert!(line.bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn line_str_matches_line() {
        let (text, number) = (line_str!(), line!());
        let parsed: u32 = text.parse().unwrap();
        assert_eq!(parsed, number);
    }

    #[test]
    fn line_str_is_const() {
        const LINE: &str = line_str!();
        let parsed: u32 = LINE.parse().unwrap();
        assert!(parsed > 0);
    }
}
