//! Compound selectors: `tag`, `#id`, `.class`, or any combination such as
//! `button.dot.active`. Combinators and pseudo-classes are not supported.

/// A parsed compound selector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

fn is_ident(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn next_marker(s: &str) -> usize {
    s.find(['#', '.']).unwrap_or(s.len())
}

impl Selector {
    /// Parse a selector, `None` if it is empty or unsupported.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }

        let mut selector = Self::default();
        let tag_len = next_marker(input);
        let tag = &input[..tag_len];
        if tag == "*" {
            // universal
        } else if !tag.is_empty() {
            if !is_ident(tag) {
                return None;
            }
            selector.tag = Some(tag.to_ascii_lowercase());
        }

        let mut rest = &input[tag_len..];
        while let Some(marker) = rest.chars().next() {
            rest = &rest[marker.len_utf8()..];
            let len = next_marker(rest);
            let name = &rest[..len];
            if !is_ident(name) {
                return None;
            }
            match marker {
                '#' => {
                    if selector.id.is_some() {
                        return None;
                    }
                    selector.id = Some(name.to_string());
                }
                _ => selector.classes.push(name.to_string()),
            }
            rest = &rest[len..];
        }

        Some(selector)
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Whether an element with these properties matches.
    pub fn matches(&self, tag: &str, id: Option<&str>, classes: &[String]) -> bool {
        if let Some(want) = &self.tag {
            if !want.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(want) = &self.id {
            if id != Some(want.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|c| classes.contains(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_compound() {
        let sel = Selector::parse("button.dot.active").unwrap();
        assert_eq!(sel.tag(), Some("button"));
        assert_eq!(sel.classes(), &classes(&["dot", "active"])[..]);

        let sel = Selector::parse("#galleryPrev").unwrap();
        assert_eq!(sel.id(), Some("galleryPrev"));
        assert_eq!(sel.tag(), None);
    }

    #[test]
    fn test_rejects_unsupported() {
        assert!(Selector::parse("").is_none());
        assert!(Selector::parse(".a .b").is_none());
        assert!(Selector::parse("div > p").is_none());
        assert!(Selector::parse("a:hover").is_none());
        assert!(Selector::parse(".").is_none());
        assert!(Selector::parse("#a#b").is_none());
    }

    #[test]
    fn test_matches() {
        let sel = Selector::parse("div.slide").unwrap();
        assert!(sel.matches("DIV", None, &classes(&["slide", "wide"])));
        assert!(!sel.matches("span", None, &classes(&["slide"])));
        assert!(!sel.matches("div", None, &classes(&["wide"])));

        let any = Selector::parse("*").unwrap();
        assert!(any.matches("p", Some("x"), &[]));
    }
}
