//! Event message types.
//!
//! Events are notifications delivered by the host when tab activity occurs.
//! The raw [`Event`] carries a `module.eventName` method string and a JSON
//! params object; [`Event::parse`] produces a typed [`ParsedEvent`] for the
//! dispatcher.
//!
//! # Event Types
//!
//! | Module | Events |
//! |--------|--------|
//! | `tabs` | `created`, `removed`, `updated` |
//! | `webNavigation` | `committed` |

// ============================================================================
// Imports
// ============================================================================

use serde::Deserialize;
use serde_json::Value;

use crate::identifiers::{FrameId, GroupId, TabId};

// ============================================================================
// Event
// ============================================================================

/// A raw event notification from the host.
///
/// # Format
///
/// ```json
/// {
///   "method": "webNavigation.committed",
///   "params": { "tabId": 3, "frameId": 0, "url": "...", "transitionType": "typed" }
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    /// Event name in `module.eventName` format.
    pub method: String,

    /// Event-specific data.
    #[serde(default)]
    pub params: Value,
}

impl Event {
    /// Creates a raw event from a method name and params.
    #[inline]
    #[must_use]
    pub fn new(method: impl Into<String>, params: Value) -> Self {
        Self {
            method: method.into(),
            params,
        }
    }

    /// Returns the module name from the method.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let event = Event::new("tabs.created", json!({}));
    /// assert_eq!(event.module(), "tabs");
    /// ```
    #[inline]
    #[must_use]
    pub fn module(&self) -> &str {
        self.method.split('.').next().unwrap_or_default()
    }

    /// Returns the event name from the method.
    #[inline]
    #[must_use]
    pub fn event_name(&self) -> &str {
        self.method.split('.').nth(1).unwrap_or_default()
    }

    /// Parses the event into a typed variant.
    ///
    /// Events with an unrecognized method, or whose payload lacks a valid
    /// `tabId`, parse to [`ParsedEvent::Unknown`].
    #[must_use]
    pub fn parse(&self) -> ParsedEvent {
        self.parse_internal()
    }
}

// ============================================================================
// TransitionType
// ============================================================================

/// Host-provided classification of how a navigation was initiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionType {
    /// URL typed directly into the address bar.
    Typed,
    /// Link click.
    Link,
    /// Page reload.
    Reload,
    /// Form submission.
    FormSubmit,
    /// Bookmark or other browser-suggested entry point.
    AutoBookmark,
    /// Address-bar suggestion completion.
    Generated,
    /// Automatic sub-frame navigation.
    AutoSubframe,
    /// User-initiated sub-frame navigation.
    ManualSubframe,
    /// Browser start page.
    StartPage,
    /// Keyword search from the address bar.
    Keyword,
    /// Any transition the host reports that is not listed above.
    Other,
}

impl TransitionType {
    /// Parses a host transition string.
    ///
    /// Unrecognized strings map to [`TransitionType::Other`].
    #[must_use]
    pub fn from_host(value: &str) -> Self {
        match value {
            "typed" => Self::Typed,
            "link" => Self::Link,
            "reload" => Self::Reload,
            "form_submit" => Self::FormSubmit,
            "auto_bookmark" => Self::AutoBookmark,
            "generated" => Self::Generated,
            "auto_subframe" => Self::AutoSubframe,
            "manual_subframe" => Self::ManualSubframe,
            "start_page" => Self::StartPage,
            "keyword" | "keyword_generated" => Self::Keyword,
            _ => Self::Other,
        }
    }

    /// Returns `true` for a user-typed navigation.
    ///
    /// Typed navigations found new groups.
    #[inline]
    #[must_use]
    pub const fn is_typed(self) -> bool {
        matches!(self, Self::Typed)
    }
}

// ============================================================================
// TabStatus
// ============================================================================

/// Loading status reported by tab-updated events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabStatus {
    /// Page is still loading.
    Loading,
    /// Page load finished.
    Complete,
}

impl TabStatus {
    /// Parses a host status string.
    #[must_use]
    pub fn from_host(value: &str) -> Option<Self> {
        match value {
            "loading" => Some(Self::Loading),
            "complete" => Some(Self::Complete),
            _ => None,
        }
    }
}

// ============================================================================
// ParsedEvent
// ============================================================================

/// Parsed event types for type-safe handling.
#[derive(Debug, Clone)]
pub enum ParsedEvent {
    /// A new tab was opened.
    TabCreated {
        /// The new tab's ID.
        tab_id: TabId,
        /// Tab this one was spawned from, if any.
        opener_tab_id: Option<TabId>,
        /// Initial URL, if already known.
        url: Option<String>,
        /// Initial page title, if already known.
        title: Option<String>,
        /// Group membership at creation time, if any.
        group_id: Option<GroupId>,
    },

    /// A tab was closed.
    TabRemoved {
        /// The closed tab's ID.
        tab_id: TabId,
    },

    /// Tab properties changed.
    TabUpdated {
        /// The updated tab's ID.
        tab_id: TabId,
        /// New loading status, if it changed.
        status: Option<TabStatus>,
        /// New URL, if it changed.
        url: Option<String>,
    },

    /// A navigation committed in some frame of a tab.
    NavigationCommitted {
        /// The navigating tab's ID.
        tab_id: TabId,
        /// Frame the navigation happened in.
        frame_id: FrameId,
        /// Committed URL.
        url: String,
        /// How the navigation was initiated.
        transition: TransitionType,
    },

    /// Unknown or malformed event.
    Unknown {
        /// Event method.
        method: String,
        /// Event params.
        params: Value,
    },
}

// ============================================================================
// Event Parsing Implementation
// ============================================================================

impl Event {
    /// Internal parsing implementation.
    fn parse_internal(&self) -> ParsedEvent {
        let parsed = match self.method.as_str() {
            "tabs.created" => self.parse_tab_created(),
            "tabs.removed" => self.parse_tab_removed(),
            "tabs.updated" => self.parse_tab_updated(),
            "webNavigation.committed" => self.parse_navigation_committed(),
            _ => None,
        };

        parsed.unwrap_or_else(|| ParsedEvent::Unknown {
            method: self.method.clone(),
            params: self.params.clone(),
        })
    }

    fn parse_tab_created(&self) -> Option<ParsedEvent> {
        Some(ParsedEvent::TabCreated {
            tab_id: self.get_tab_id("tabId")?,
            opener_tab_id: self.get_tab_id("openerTabId"),
            url: self.get_optional_string("url"),
            title: self.get_optional_string("title"),
            group_id: self.get_group_id("groupId"),
        })
    }

    fn parse_tab_removed(&self) -> Option<ParsedEvent> {
        Some(ParsedEvent::TabRemoved {
            tab_id: self.get_tab_id("tabId")?,
        })
    }

    fn parse_tab_updated(&self) -> Option<ParsedEvent> {
        Some(ParsedEvent::TabUpdated {
            tab_id: self.get_tab_id("tabId")?,
            status: self
                .get_optional_string("status")
                .as_deref()
                .and_then(TabStatus::from_host),
            url: self.get_optional_string("url"),
        })
    }

    fn parse_navigation_committed(&self) -> Option<ParsedEvent> {
        Some(ParsedEvent::NavigationCommitted {
            tab_id: self.get_tab_id("tabId")?,
            frame_id: FrameId::new(self.get_u64("frameId")),
            url: self.get_optional_string("url")?,
            transition: TransitionType::from_host(
                self.get_optional_string("transitionType")
                    .as_deref()
                    .unwrap_or_default(),
            ),
        })
    }

    /// Gets a tab ID from params, rejecting the host's negative sentinel.
    #[inline]
    fn get_tab_id(&self, key: &str) -> Option<TabId> {
        self.params
            .get(key)
            .and_then(|v| v.as_i64())
            .and_then(TabId::new)
    }

    /// Gets a group ID from params, rejecting the host's negative sentinel.
    #[inline]
    fn get_group_id(&self, key: &str) -> Option<GroupId> {
        self.params
            .get(key)
            .and_then(|v| v.as_i64())
            .and_then(GroupId::new)
    }

    /// Gets an optional string from params.
    #[inline]
    fn get_optional_string(&self, key: &str) -> Option<String> {
        self.params
            .get(key)
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
    }

    /// Gets a u64 from params.
    #[inline]
    fn get_u64(&self, key: &str) -> u64 {
        self.params
            .get(key)
            .and_then(|v| v.as_u64())
            .unwrap_or_default()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn test_navigation_committed_parsing() {
        let json_str = r#"{
            "method": "webNavigation.committed",
            "params": {
                "tabId": 3,
                "frameId": 0,
                "url": "https://example.com",
                "transitionType": "typed"
            }
        }"#;

        let event: Event = serde_json::from_str(json_str).expect("parse event");
        assert_eq!(event.module(), "webNavigation");
        assert_eq!(event.event_name(), "committed");

        match event.parse() {
            ParsedEvent::NavigationCommitted {
                tab_id,
                frame_id,
                url,
                transition,
            } => {
                assert_eq!(tab_id, TabId::from_raw(3));
                assert!(frame_id.is_main());
                assert_eq!(url, "https://example.com");
                assert!(transition.is_typed());
            }
            other => panic!("unexpected parsed event: {other:?}"),
        }
    }

    #[test]
    fn test_tab_created_parsing() {
        let event = Event::new(
            "tabs.created",
            json!({
                "tabId": 7,
                "openerTabId": 3,
                "url": "about:blank",
                "groupId": -1
            }),
        );

        match event.parse() {
            ParsedEvent::TabCreated {
                tab_id,
                opener_tab_id,
                url,
                group_id,
                ..
            } => {
                assert_eq!(tab_id, TabId::from_raw(7));
                assert_eq!(opener_tab_id, Some(TabId::from_raw(3)));
                assert_eq!(url.as_deref(), Some("about:blank"));
                assert_eq!(group_id, None);
            }
            other => panic!("unexpected parsed event: {other:?}"),
        }
    }

    #[test]
    fn test_tab_updated_status() {
        let event = Event::new(
            "tabs.updated",
            json!({ "tabId": 4, "status": "complete", "url": "https://blog.example.com" }),
        );

        match event.parse() {
            ParsedEvent::TabUpdated {
                tab_id,
                status,
                url,
            } => {
                assert_eq!(tab_id, TabId::from_raw(4));
                assert_eq!(status, Some(TabStatus::Complete));
                assert_eq!(url.as_deref(), Some("https://blog.example.com"));
            }
            other => panic!("unexpected parsed event: {other:?}"),
        }
    }

    #[test]
    fn test_transition_type_from_host() {
        assert_eq!(TransitionType::from_host("typed"), TransitionType::Typed);
        assert_eq!(TransitionType::from_host("link"), TransitionType::Link);
        assert_eq!(
            TransitionType::from_host("client_redirect"),
            TransitionType::Other
        );
        assert!(!TransitionType::Link.is_typed());
    }

    #[test]
    fn test_missing_tab_id_is_unknown() {
        let event = Event::new("tabs.removed", json!({}));

        match event.parse() {
            ParsedEvent::Unknown { method, .. } => assert_eq!(method, "tabs.removed"),
            other => panic!("expected Unknown, got {other:?}"),
        }
    }

    #[test]
    fn test_sentinel_tab_id_is_unknown() {
        let event = Event::new("tabs.removed", json!({ "tabId": -1 }));
        assert!(matches!(event.parse(), ParsedEvent::Unknown { .. }));
    }

    #[test]
    fn test_unknown_event() {
        let event = Event::new("downloads.changed", json!({ "foo": "bar" }));

        match event.parse() {
            ParsedEvent::Unknown { method, .. } => assert_eq!(method, "downloads.changed"),
            other => panic!("expected Unknown, got {other:?}"),
        }
    }
}
