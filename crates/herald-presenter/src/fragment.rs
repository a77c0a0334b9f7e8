//! Resolved notice and dialog fragments and their markup templates.
//!
//! A fragment is what a request becomes once every omitted field has been
//! replaced by its configured default. Hosts that speak HTML use
//! [`NoticeFragment::to_html`] and [`DialogFragment::to_html`]; other hosts
//! read the resolved fields directly.

use std::{fmt, fmt::Write, time::Duration};

use herald_bridge::{
    DialogRequest, Icon, NoticeRequest, Position, Theme,
    config::{DialogDefaults, NoticeDefaults},
};

/// Identifier of a node mounted on a surface. Unique per presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u64);

impl NodeId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "herald-{}", self.0)
    }
}

/// Shape of a notice fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLayout {
    /// One row: icon, message and dismiss control.
    Inline,
    /// Header row with icon, title and dismiss control, then a body row.
    HeaderBody,
}

/// A notice with every field resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeFragment {
    pub id: NodeId,
    pub title: Option<String>,
    pub message: String,
    pub theme: Theme,
    pub position: Position,
    pub icon: Icon,
    pub duration: Duration,
}

impl NoticeFragment {
    /// Resolves a request against the defaults. Returns `None` for an empty
    /// message.
    pub fn resolve(id: NodeId, request: NoticeRequest, defaults: &NoticeDefaults) -> Option<Self> {
        if request.message.is_empty() {
            return None;
        }

        Some(Self {
            id,
            title: request.title.filter(|title| !title.is_empty()),
            message: request.message,
            theme: request.theme.unwrap_or(defaults.theme),
            position: request.position.unwrap_or(defaults.position),
            icon: request.icon.unwrap_or(defaults.icon),
            duration: request
                .duration
                .unwrap_or(Duration::from_millis(defaults.duration_ms)),
        })
    }

    pub fn layout(&self) -> NoticeLayout {
        match self.title {
            Some(_) => NoticeLayout::HeaderBody,
            None => NoticeLayout::Inline,
        }
    }

    /// Classes of the positioned container wrapping the notice.
    pub fn container_class(&self) -> String {
        format!("toast-container position-fixed p-3 {}", self.position.placement())
    }

    /// Markup of the notice element itself, without its container.
    pub fn to_html(&self) -> String {
        let dismiss = dismiss_class(self.theme);
        let icon = icon_html(self.icon);
        let message = escape(&self.message);

        let mut html = String::with_capacity(256);
        let _ = write!(
            html,
            r#"<div class="toast align-items-center text-bg-{}" role="alert" aria-live="assertive" aria-atomic="true">"#,
            self.theme.token()
        );
        match &self.title {
            Some(title) => {
                let _ = write!(
                    html,
                    r#"<div class="toast-header">{icon}<strong class="me-auto">{}</strong><button type="button" class="{dismiss}" data-bs-dismiss="toast" aria-label="Close"></button></div><div class="toast-body">{message}</div>"#,
                    escape(title)
                );
            }
            None => {
                let _ = write!(
                    html,
                    r#"<div class="d-flex"><div class="toast-body">{icon}{message}</div><button type="button" class="{dismiss} me-2 m-auto" data-bs-dismiss="toast" aria-label="Close"></button></div>"#
                );
            }
        }
        html.push_str("</div>");
        html
    }
}

/// A dialog with every field resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogFragment {
    pub id: NodeId,
    pub title: Option<String>,
    pub message: String,
    pub icon: Icon,
    pub confirm_button_text: String,
    pub confirm_button_theme: Theme,
    pub footer: Option<String>,
}

impl DialogFragment {
    /// Resolves a request against the defaults. Returns `None` for an empty
    /// message.
    pub fn resolve(id: NodeId, request: DialogRequest, defaults: &DialogDefaults) -> Option<Self> {
        if request.message.is_empty() {
            return None;
        }

        Some(Self {
            id,
            title: request.title.filter(|title| !title.is_empty()),
            message: request.message,
            icon: request.icon.unwrap_or(defaults.icon),
            confirm_button_text: request
                .confirm_button_text
                .unwrap_or_else(|| defaults.confirm_button_text.clone()),
            confirm_button_theme: request
                .confirm_button_theme
                .unwrap_or(defaults.confirm_button_theme),
            footer: request.footer.filter(|footer| !footer.is_empty()),
        })
    }

    /// Markup of the whole modal.
    pub fn to_html(&self) -> String {
        let mut html = String::with_capacity(512);
        let _ = write!(
            html,
            r#"<div class="modal fade" id="{}" tabindex="-1" aria-hidden="true"><div class="modal-dialog modal-dialog-centered"><div class="modal-content">"#,
            self.id
        );
        let _ = write!(
            html,
            r#"<div class="modal-header"><h5 class="modal-title">{}{}</h5><button type="button" class="btn-close" data-bs-dismiss="modal" aria-label="Close"></button></div>"#,
            icon_html(self.icon),
            escape(self.title.as_deref().unwrap_or_default())
        );
        let _ = write!(
            html,
            r#"<div class="modal-body">{}</div><div class="modal-footer">"#,
            escape(&self.message)
        );
        if let Some(footer) = &self.footer {
            let _ = write!(html, r#"<span class="me-auto">{}</span>"#, escape(footer));
        }
        let _ = write!(
            html,
            r#"<button type="button" class="btn btn-{}" data-bs-dismiss="modal">{}</button>"#,
            self.confirm_button_theme.token(),
            escape(&self.confirm_button_text)
        );
        html.push_str("</div></div></div></div>");
        html
    }
}

fn dismiss_class(theme: Theme) -> &'static str {
    if theme.light_dismiss() {
        "btn-close btn-close-white"
    } else {
        "btn-close"
    }
}

fn icon_html(icon: Icon) -> String {
    format!(r#"<i class="bi {} me-2"></i>"#, icon.glyph())
}

/// Escapes text interpolated into element content or attribute values.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice(request: NoticeRequest) -> NoticeFragment {
        NoticeFragment::resolve(NodeId(1), request, &NoticeDefaults::default()).unwrap()
    }

    fn dialog(request: DialogRequest) -> DialogFragment {
        DialogFragment::resolve(NodeId(1), request, &DialogDefaults::default()).unwrap()
    }

    #[test]
    fn empty_message_resolves_to_nothing() {
        let defaults = NoticeDefaults::default();
        assert!(NoticeFragment::resolve(NodeId(1), NoticeRequest::new(""), &defaults).is_none());
        assert!(
            DialogFragment::resolve(NodeId(1), DialogRequest::new(""), &DialogDefaults::default())
                .is_none()
        );
    }

    #[test]
    fn omitted_fields_take_defaults() {
        let fragment = notice(NoticeRequest::new("Saved"));

        assert_eq!(fragment.theme, Theme::Light);
        assert_eq!(fragment.position, Position::TopEnd);
        assert_eq!(fragment.icon, Icon::Info);
        assert_eq!(fragment.duration, Duration::from_millis(4000));
        assert_eq!(fragment.layout(), NoticeLayout::Inline);
    }

    #[test]
    fn explicit_fields_win_over_defaults() {
        let fragment = notice(
            NoticeRequest::new("Failed to save")
                .title("Error")
                .theme(Theme::Red)
                .position(Position::BottomStart)
                .icon(Icon::Error)
                .duration_ms(1000),
        );

        assert_eq!(fragment.theme, Theme::Red);
        assert_eq!(fragment.position, Position::BottomStart);
        assert_eq!(fragment.icon, Icon::Error);
        assert_eq!(fragment.duration, Duration::from_secs(1));
        assert_eq!(fragment.layout(), NoticeLayout::HeaderBody);
    }

    #[test]
    fn empty_title_uses_inline_layout() {
        let fragment = notice(NoticeRequest::new("Saved").title(""));
        assert_eq!(fragment.layout(), NoticeLayout::Inline);
    }

    #[test]
    fn inline_markup_has_no_header() {
        let html = notice(NoticeRequest::new("Saved")).to_html();

        assert!(html.contains("text-bg-light"));
        assert!(html.contains(r#"<div class="d-flex">"#));
        assert!(!html.contains("toast-header"));
        assert!(html.contains("bi-info-circle-fill"));
        assert!(!html.contains("btn-close-white"));
    }

    #[test]
    fn titled_markup_has_header_and_light_dismiss_on_dark_theme() {
        let html = notice(NoticeRequest::new("Failed").title("Error").theme(Theme::Red)).to_html();

        assert!(html.contains("text-bg-danger"));
        assert!(html.contains(r#"<strong class="me-auto">Error</strong>"#));
        assert!(html.contains(r#"<div class="toast-body">Failed</div>"#));
        assert!(html.contains("btn-close btn-close-white"));
    }

    #[test]
    fn container_is_positioned() {
        let fragment = notice(NoticeRequest::new("x").position(Position::MiddleCenter));
        assert_eq!(
            fragment.container_class(),
            "toast-container position-fixed p-3 top-50 start-50 translate-middle"
        );
    }

    #[test]
    fn text_is_escaped() {
        let html = notice(NoticeRequest::new("<b>bold</b> & \"quoted\"")).to_html();
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt; &amp; &quot;quoted&quot;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn dialog_defaults_to_ok_on_success_button() {
        let fragment = dialog(DialogRequest::new("Done"));

        assert_eq!(fragment.confirm_button_text, "OK");
        assert_eq!(fragment.confirm_button_theme, Theme::Green);
        assert!(fragment.to_html().contains(r#"class="btn btn-success""#));
    }

    #[test]
    fn dialog_markup_has_header_body_and_footer() {
        let html = dialog(
            DialogRequest::new("Delete item?")
                .title("Confirm")
                .confirm_button_text("Delete")
                .confirm_button_theme(Theme::Red)
                .footer("This cannot be undone"),
        )
        .to_html();

        assert!(html.contains("modal-header"));
        assert!(html.contains("Confirm</h5>"));
        assert!(html.contains(r#"<div class="modal-body">Delete item?</div>"#));
        assert!(html.contains(r#"<span class="me-auto">This cannot be undone</span>"#));
        assert!(html.contains(r#"data-bs-dismiss="modal">Delete</button>"#));
        assert!(html.contains("btn-danger"));
        assert!(html.contains(r#"id="herald-1""#));
    }
}
