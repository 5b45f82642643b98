use std::fmt;

/// An in-page fragment target, stored without the leading `#`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Anchor(String);

impl Anchor {
    /// Accepts `#contato`, `contato` or a full `/#contato` href. Empty
    /// fragments yield `None`.
    pub fn parse(href: &str) -> Option<Self> {
        let fragment = match href.find('#') {
            Some(pos) => &href[pos + 1..],
            None => href,
        };
        let fragment = fragment.trim();
        if fragment.is_empty() {
            None
        } else {
            Some(Self(fragment.to_owned()))
        }
    }

    pub fn id(&self) -> &str {
        &self.0
    }

    pub fn href(&self) -> String {
        format!("#{}", self.0)
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub struct NavLink {
    pub label: &'static str,
    pub target: &'static str,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink { label: "Sobre", target: "sobre" },
    NavLink { label: "Benefícios", target: "beneficios" },
    NavLink { label: "Processo", target: "processo" },
    NavLink { label: "Produtos", target: "produtos" },
    NavLink { label: "Contato", target: "contato" },
];

impl NavLink {
    pub fn anchor(&self) -> Anchor {
        Anchor(self.target.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fragment_forms() {
        assert_eq!(Anchor::parse("#contato").unwrap().id(), "contato");
        assert_eq!(Anchor::parse("contato").unwrap().id(), "contato");
        assert_eq!(Anchor::parse("/#produtos").unwrap().id(), "produtos");
        assert_eq!(Anchor::parse("#"), None);
        assert_eq!(Anchor::parse(""), None);
        assert_eq!(Anchor::parse("#  "), None);
    }

    #[test]
    fn href_and_display_round_trip() {
        let anchor = Anchor::parse("#sobre").unwrap();
        assert_eq!(anchor.href(), "#sobre");
        assert_eq!(anchor.to_string(), "#sobre");
    }

    #[test]
    fn nav_targets_are_plain_ascii_ids() {
        for link in &NAV_LINKS {
            assert!(link.target.is_ascii(), "{} has a non-ascii anchor", link.label);
            assert_eq!(link.anchor().id(), link.target);
        }
    }
}
