use super::color::{Accent, Classification, SECONDARY_COLOR};
use super::shape::{
    Bounds, CARD_SHAPE_TYPE, CARD_TYPE, CardBody, CardLink, CardShape, DESCRIPTION_FONT_SIZE,
    DESCRIPTION_HEIGHT, LEADING, LINK_COLOR, LINK_TYPE_URL, LinkSpan, ShapesDocument, StyleRun,
    TEXT_COLOR, TITLE_FONT_SIZE, TITLE_HEIGHT, TextBlock,
};
use crate::issue::IssueFields;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Where the issue link lives on the card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// Title is "KEY summary" and the key itself carries the link.
    #[default]
    InlineKeyLink,
    /// Title is the key alone, the link is attached to the whole card and the
    /// summary moves into the description.
    CardLink,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextTemplates {
    /// `{assignee}` is replaced with the assignee's name.
    #[serde(default = "default_credit")]
    pub credit: String,

    /// Description used by the card-link layout; `{summary}` and `{credit}`.
    #[serde(default = "default_summary_with_credit")]
    pub summary_with_credit: String,
}

fn default_credit() -> String {
    "担当: {assignee}".to_string()
}

fn default_summary_with_credit() -> String {
    "{summary}\n({credit})".to_string()
}

impl Default for TextTemplates {
    fn default() -> Self {
        Self {
            credit: default_credit(),
            summary_with_credit: default_summary_with_credit(),
        }
    }
}

impl TextTemplates {
    pub fn credit_line(&self, assignee: &str) -> Option<String> {
        if assignee.is_empty() {
            return None;
        }
        Some(fill(&self.credit, &[("assignee", assignee)]))
    }

    fn card_description(&self, summary: &str, assignee: &str) -> String {
        match self.credit_line(assignee) {
            None => summary.to_string(),
            Some(credit) if summary.is_empty() => credit,
            Some(credit) => fill(
                &self.summary_with_credit,
                &[("summary", summary), ("credit", &credit)],
            ),
        }
    }
}

/// Replaces `{name}` placeholders in one pass; unknown placeholders stay.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let replaced = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| (*v, close))
        });

        match replaced {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Everything the builder reads from configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardConfig {
    #[serde(default)]
    pub layout: Layout,

    #[serde(default)]
    pub classification: Classification,

    #[serde(default)]
    pub templates: TextTemplates,
}

/// The two clipboard representations of one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardPayload {
    pub structured: String,
    pub plain: String,
}

#[derive(Debug, Clone)]
pub struct CardBuilder {
    layout: Layout,
    classification: Classification,
    templates: TextTemplates,
    uid_source: fn() -> Uuid,
}

impl CardBuilder {
    pub fn new(layout: Layout) -> Self {
        Self {
            layout,
            classification: Classification::default(),
            templates: TextTemplates::default(),
            uid_source: Uuid::new_v4,
        }
    }

    pub fn from_config(config: &CardConfig) -> Self {
        Self {
            layout: config.layout,
            classification: config.classification.clone(),
            templates: config.templates.clone(),
            uid_source: Uuid::new_v4,
        }
    }

    pub fn with_uid_source(mut self, uid_source: fn() -> Uuid) -> Self {
        self.uid_source = uid_source;
        self
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn accent(&self, issue: &IssueFields) -> Accent {
        self.classification
            .resolve(&issue.issue_type, &issue.priority)
    }

    pub fn build(&self, issue: &IssueFields) -> CardPayload {
        let document = self.build_document(issue);
        // The document holds only strings, numbers and booleans.
        let structured =
            serde_json::to_string(&document).expect("card document is always serializable");

        CardPayload {
            structured,
            plain: issue.plain_text(),
        }
    }

    pub fn build_document(&self, issue: &IssueFields) -> ShapesDocument {
        let (title, description, link) = match self.layout {
            Layout::InlineKeyLink => (
                inline_key_title(issue),
                self.templates
                    .credit_line(&issue.assignee)
                    .unwrap_or_default(),
                None,
            ),
            Layout::CardLink => (
                key_only_title(&issue.key),
                self.templates
                    .card_description(&issue.summary, &issue.assignee),
                Some(CardLink {
                    url: issue.url.clone(),
                }),
            ),
        };

        let accent = self.accent(issue);
        let uid = (self.uid_source)();

        debug!(
            key = %issue.key,
            layout = ?self.layout,
            accent = %accent,
            uid = %uid,
            "Built card shape"
        );

        ShapesDocument::single(CardShape {
            uid,
            shape_type: CARD_SHAPE_TYPE,
            keep_aspect_ratio: true,
            locked: false,
            bounds: Bounds::default(),
            card_type: CARD_TYPE,
            cacoo: CardBody {
                title,
                description: description_block(description),
                expanded: true,
                primary_color: accent.hex().to_string(),
                secondary_color: SECONDARY_COLOR.to_string(),
                due_date: issue.due_date.clone().unwrap_or_default(),
                external_account_id: String::new(),
                link,
            },
        })
    }
}

impl Default for CardBuilder {
    fn default() -> Self {
        Self::new(Layout::default())
    }
}

/// Offsets are in UTF-16 code units, the unit the card's reader indexes by.
fn inline_key_title(issue: &IssueFields) -> TextBlock {
    let key_len = issue.key.encode_utf16().count();

    let mut styles = vec![
        StyleRun::new(0, TITLE_FONT_SIZE, LINK_COLOR)
            .bold()
            .underline(),
    ];

    let text = if issue.summary.is_empty() {
        issue.key.clone()
    } else {
        styles.push(StyleRun::new(key_len + 1, TITLE_FONT_SIZE, TEXT_COLOR).bold());
        format!("{} {}", issue.key, issue.summary)
    };

    let links = match key_len.checked_sub(1) {
        Some(end_index) => vec![LinkSpan {
            link_type: LINK_TYPE_URL,
            to: issue.url.clone(),
            start_index: 0,
            end_index,
        }],
        None => Vec::new(),
    };

    TextBlock {
        text,
        leading: LEADING,
        styles,
        links,
        height: TITLE_HEIGHT,
    }
}

fn key_only_title(key: &str) -> TextBlock {
    TextBlock {
        text: key.to_string(),
        leading: LEADING,
        styles: vec![StyleRun::new(0, TITLE_FONT_SIZE, TEXT_COLOR).bold()],
        links: Vec::new(),
        height: TITLE_HEIGHT,
    }
}

fn description_block(text: String) -> TextBlock {
    TextBlock {
        text,
        leading: LEADING,
        styles: vec![StyleRun::new(0, DESCRIPTION_FONT_SIZE, TEXT_COLOR)],
        links: Vec::new(),
        height: DESCRIPTION_HEIGHT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::color::{COLOR_BLUE, COLOR_GREEN, COLOR_RED};
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    const FIXED_UID: &str = "550e8400-e29b-41d4-a716-446655440000";

    fn fixed_uid() -> Uuid {
        Uuid::parse_str(FIXED_UID).unwrap()
    }

    fn base_issue() -> IssueFields {
        IssueFields::new(
            "PROJ-123",
            "Fix login bug",
            "https://example.backlog.jp/view/PROJ-123",
        )
        .with_assignee("Taro Yamada")
        .with_due_date(Some("2026/03/15".to_string()))
        .with_classification("バグ", "高")
    }

    fn card(layout: Layout, issue: &IssueFields) -> CardBody {
        let builder = CardBuilder::new(layout).with_uid_source(fixed_uid);
        builder.build_document(issue).shapes.remove(0).cacoo
    }

    #[test]
    fn test_structured_text_is_valid_json() {
        let payload = CardBuilder::default().build(&base_issue());
        let parsed: Value = serde_json::from_str(&payload.structured).unwrap();

        assert_eq!(parsed["target"], "shapes");
        assert_eq!(parsed["sheetId"], "generated");
        assert_eq!(parsed["shapes"].as_array().unwrap().len(), 1);
        assert_eq!(parsed["shapes"][0]["type"], 12);
        assert_eq!(parsed["shapes"][0]["cacoo"]["secondaryColor"], "#DCEBFF");
    }

    #[test]
    fn test_end_to_end_defect_issue() {
        for layout in [Layout::InlineKeyLink, Layout::CardLink] {
            let payload = CardBuilder::new(layout).build(&base_issue());
            let parsed: Value = serde_json::from_str(&payload.structured).unwrap();
            let cacoo = &parsed["shapes"][0]["cacoo"];

            assert_eq!(cacoo["primaryColor"], COLOR_RED);
            assert_eq!(cacoo["dueDate"], "2026/03/15");
            assert!(
                cacoo["description"]["text"]
                    .as_str()
                    .unwrap()
                    .contains("Taro Yamada")
            );
            assert_eq!(payload.plain, "PROJ-123 Fix login bug");
        }
    }

    #[test]
    fn test_inline_title_styles_and_link() {
        let body = card(Layout::InlineKeyLink, &base_issue());

        assert_eq!(body.title.text, "PROJ-123 Fix login bug");
        assert_eq!(
            body.title.styles,
            vec![
                StyleRun::new(0, 14, "2488fd").bold().underline(),
                StyleRun::new(9, 14, "333333").bold(),
            ]
        );
        assert_eq!(
            body.title.links,
            vec![LinkSpan {
                link_type: 1,
                to: "https://example.backlog.jp/view/PROJ-123".to_string(),
                start_index: 0,
                end_index: 7,
            }]
        );
        assert_eq!(body.link, None);
        assert_eq!(body.description.text, "担当: Taro Yamada");
    }

    #[test]
    fn test_inline_title_without_summary() {
        let issue = IssueFields::new("PROJ-1", "", "https://x");
        let body = card(Layout::InlineKeyLink, &issue);

        assert_eq!(body.title.text, "PROJ-1");
        assert_eq!(body.title.styles.len(), 1);
        assert_eq!(body.title.links[0].end_index, 5);
    }

    #[test]
    fn test_inline_offsets_for_japanese_text() {
        let issue = IssueFields::new("課題-1", "ログイン修正", "https://x");
        let body = card(Layout::InlineKeyLink, &issue);
        let title_len = body.title.text.encode_utf16().count();

        assert_eq!(body.title.links[0].start_index, 0);
        assert_eq!(body.title.links[0].end_index, 3);
        assert_eq!(body.title.styles[1].index, 5);
        assert!(body.title.styles.iter().all(|s| s.index < title_len));
        assert!(body.title.links.iter().all(|l| l.end_index < title_len));
    }

    #[test]
    fn test_inline_offsets_use_utf16_units() {
        let issue = IssueFields::new("😀-1", "fix", "https://x");
        let body = card(Layout::InlineKeyLink, &issue);

        assert_eq!(body.title.links[0].end_index, 3);
        assert_eq!(body.title.styles[1].index, 5);
        assert!(body.title.styles[1].index < body.title.text.encode_utf16().count());
    }

    #[test]
    fn test_empty_key_has_no_link_span() {
        let issue = IssueFields::new("", "orphan", "https://x");
        let body = card(Layout::InlineKeyLink, &issue);
        assert!(body.title.links.is_empty());
    }

    #[test]
    fn test_card_link_layout() {
        let body = card(Layout::CardLink, &base_issue());

        assert_eq!(body.title.text, "PROJ-123");
        assert_eq!(body.title.styles, vec![StyleRun::new(0, 14, "333333").bold()]);
        assert!(body.title.links.is_empty());
        assert_eq!(
            body.link,
            Some(CardLink {
                url: "https://example.backlog.jp/view/PROJ-123".to_string()
            })
        );
        assert_eq!(body.description.text, "Fix login bug\n(担当: Taro Yamada)");
    }

    #[test]
    fn test_card_link_description_without_assignee() {
        let issue = base_issue().with_assignee("");
        let body = card(Layout::CardLink, &issue);
        assert_eq!(body.description.text, "Fix login bug");
    }

    #[test]
    fn test_card_link_description_without_summary() {
        let issue = IssueFields::new("PROJ-2", "", "https://x").with_assignee("Hanako");
        let body = card(Layout::CardLink, &issue);
        assert_eq!(body.description.text, "担当: Hanako");
    }

    #[test]
    fn test_no_credit_without_assignee() {
        let issue = base_issue().with_assignee("");
        for layout in [Layout::InlineKeyLink, Layout::CardLink] {
            let body = card(layout, &issue);
            assert!(!body.description.text.contains("担当"));
        }
        assert_eq!(card(Layout::InlineKeyLink, &issue).description.text, "");
    }

    #[test]
    fn test_absent_due_date_is_empty_string() {
        let issue = base_issue().with_due_date(None);
        let payload = CardBuilder::default().build(&issue);
        let parsed: Value = serde_json::from_str(&payload.structured).unwrap();

        assert_eq!(parsed["shapes"][0]["cacoo"]["dueDate"], Value::String(String::new()));
    }

    #[test]
    fn test_plain_text_independent_of_layout() {
        let issue = base_issue();
        let inline = CardBuilder::new(Layout::InlineKeyLink).build(&issue);
        let card_link = CardBuilder::new(Layout::CardLink).build(&issue);

        assert_eq!(inline.plain, "PROJ-123 Fix login bug");
        assert_eq!(card_link.plain, inline.plain);
    }

    #[test]
    fn test_accent_colors() {
        let builder = CardBuilder::default();
        let issue = |t: &str, p: &str| IssueFields::new("K-1", "", "").with_classification(t, p);

        assert_eq!(builder.accent(&issue("バグ", "低")).hex(), COLOR_RED);
        assert_eq!(builder.accent(&issue("タスク", "低")).hex(), COLOR_GREEN);
        assert_eq!(builder.accent(&issue("", "")).hex(), COLOR_BLUE);
    }

    #[test]
    fn test_injected_uid() {
        let body = CardBuilder::default()
            .with_uid_source(fixed_uid)
            .build_document(&base_issue());
        assert_eq!(body.shapes[0].uid.to_string(), FIXED_UID);
    }

    #[test]
    fn test_consecutive_builds_get_fresh_uids() {
        let builder = CardBuilder::default();
        let first = builder.build_document(&base_issue());
        let second = builder.build_document(&base_issue());
        assert_ne!(first.shapes[0].uid, second.shapes[0].uid);
    }

    #[test]
    fn test_custom_templates() {
        let config = CardConfig {
            layout: Layout::CardLink,
            classification: Classification::default(),
            templates: TextTemplates {
                credit: "Assignee: {assignee}".to_string(),
                summary_with_credit: "{summary} / {credit}".to_string(),
            },
        };
        let builder = CardBuilder::from_config(&config);
        let body = builder.build_document(&base_issue()).shapes.remove(0).cacoo;

        assert_eq!(body.description.text, "Fix login bug / Assignee: Taro Yamada");
    }

    #[test]
    fn test_fill_leaves_unknown_placeholders() {
        assert_eq!(fill("{a}-{b}-{", &[("a", "1")]), "1-{b}-{");
        assert_eq!(fill("{a}", &[("a", "{a}")]), "{a}");
    }

    #[test]
    fn test_layout_serde_names() {
        assert_eq!(
            serde_json::to_string(&Layout::InlineKeyLink).unwrap(),
            "\"inline-key-link\""
        );
        assert_eq!(serde_json::to_string(&Layout::CardLink).unwrap(), "\"card-link\"");
    }
}
