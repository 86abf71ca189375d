//! Contact cards.
//!
//! The contact page shows one card per channel, always in the same order:
//! email, resume, GitHub, chat. Email and chat depend on deployment settings
//! ([`crate::config::CONTACT_EMAIL_ENV`], [`crate::config::CONTACT_CHAT_ENV`]);
//! when one is not set its card is replaced by a hint naming the variable to
//! set, so the layout never shifts between deployments. Resume and GitHub
//! cards are dropped when their URL is empty.

use crate::config::{CONTACT_CHAT_ENV, CONTACT_EMAIL_ENV, ContactConfig};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    Link { label: String, href: String },
    /// Not actionable; tells the site owner what to configure.
    Hint { label: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactCard {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: String,
    pub action: CardAction,
}

impl ContactCard {
    pub fn is_hint(&self) -> bool {
        matches!(self.action, CardAction::Hint { .. })
    }
}

fn without_scheme(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Cards in display order.
pub fn contact_cards(contact: &ContactConfig) -> Vec<ContactCard> {
    let mut cards = Vec::with_capacity(4);

    cards.push(match non_blank(contact.email.as_deref()) {
        Some(email) => ContactCard {
            id: "mail",
            title: "Email",
            summary: "Proposals and collaboration requests that need a quick answer.".into(),
            action: CardAction::Link {
                label: email.to_string(),
                href: format!("mailto:{email}"),
            },
        },
        None => ContactCard {
            id: "mail-missing",
            title: "Email",
            summary: format!(
                "No address configured. Set {CONTACT_EMAIL_ENV} (or contact.email) to show it here."
            ),
            action: CardAction::Hint {
                label: format!("Set {CONTACT_EMAIL_ENV}"),
            },
        },
    });

    if let Some(resume) = non_blank(Some(&contact.resume)) {
        let label = resume.rsplit('/').next().unwrap_or(resume);
        cards.push(ContactCard {
            id: "resume",
            title: "Resume",
            summary: "Career history and project summary as a single PDF.".into(),
            action: CardAction::Link {
                label: format!("Open {label}"),
                href: resume.to_string(),
            },
        });
    }

    if let Some(github) = non_blank(Some(&contact.github)) {
        cards.push(ContactCard {
            id: "github",
            title: "GitHub",
            summary: "Source code and side-project history.".into(),
            action: CardAction::Link {
                label: without_scheme(github).to_string(),
                href: github.to_string(),
            },
        });
    }

    cards.push(match non_blank(contact.chat.as_deref()) {
        Some(chat) => ContactCard {
            id: "chat",
            title: "Messenger",
            summary: "For real-time conversations.".into(),
            action: CardAction::Link {
                label: without_scheme(chat).to_string(),
                href: if chat.starts_with("http") {
                    chat.to_string()
                } else {
                    format!("https://{chat}")
                },
            },
        },
        None => ContactCard {
            id: "chat-placeholder",
            title: "Other channels",
            summary: format!(
                "Slack, Discord or any other channel can be listed by setting {CONTACT_CHAT_ENV}."
            ),
            action: CardAction::Hint {
                label: format!("Set {CONTACT_CHAT_ENV}"),
            },
        },
    });

    cards
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(cards: &[ContactCard]) -> Vec<&str> {
        cards.iter().map(|c| c.id).collect()
    }

    fn configured() -> ContactConfig {
        ContactConfig {
            github: "https://github.com/someone".into(),
            resume: "/resume.pdf".into(),
            email: Some("me@example.com".into()),
            chat: Some("open.kakao.com/o/abc".into()),
        }
    }

    #[test]
    fn fully_configured_order() {
        let cards = contact_cards(&configured());
        assert_eq!(ids(&cards), vec!["mail", "resume", "github", "chat"]);
        assert!(cards.iter().all(|c| !c.is_hint()));
    }

    #[test]
    fn email_link_uses_mailto() {
        let cards = contact_cards(&configured());
        assert_eq!(
            cards[0].action,
            CardAction::Link {
                label: "me@example.com".into(),
                href: "mailto:me@example.com".into(),
            }
        );
    }

    #[test]
    fn chat_without_scheme_gets_https() {
        let cards = contact_cards(&configured());
        assert_eq!(
            cards[3].action,
            CardAction::Link {
                label: "open.kakao.com/o/abc".into(),
                href: "https://open.kakao.com/o/abc".into(),
            }
        );
    }

    #[test]
    fn chat_label_strips_scheme() {
        let mut contact = configured();
        contact.chat = Some("https://discord.gg/x".into());
        let cards = contact_cards(&contact);
        match &cards[3].action {
            CardAction::Link { label, href } => {
                assert_eq!(label, "discord.gg/x");
                assert_eq!(href, "https://discord.gg/x");
            }
            other => panic!("expected link, got {other:?}"),
        }
    }

    #[test]
    fn missing_channels_become_hints_in_place() {
        let contact = ContactConfig {
            email: None,
            chat: Some("  ".into()),
            ..configured()
        };
        let cards = contact_cards(&contact);
        assert_eq!(
            ids(&cards),
            vec!["mail-missing", "resume", "github", "chat-placeholder"]
        );
        assert!(cards[0].is_hint());
        assert!(cards[3].is_hint());
        assert!(cards[0].summary.contains(CONTACT_EMAIL_ENV));
    }

    #[test]
    fn empty_urls_drop_cards() {
        let contact = ContactConfig {
            github: String::new(),
            resume: String::new(),
            email: None,
            chat: None,
        };
        assert_eq!(
            ids(&contact_cards(&contact)),
            vec!["mail-missing", "chat-placeholder"]
        );
    }

    #[test]
    fn resume_label_is_file_name() {
        let cards = contact_cards(&configured());
        match &cards[1].action {
            CardAction::Link { label, .. } => assert_eq!(label, "Open resume.pdf"),
            other => panic!("expected link, got {other:?}"),
        }
    }
}
