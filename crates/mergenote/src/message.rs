use crate::pull_request::PullRequest;

/// Render the merge announcement in Slack mrkdwn.
///
/// The summary is quoted verbatim on the last line; nothing is escaped or
/// wrapped.
pub fn format_message(pr: &PullRequest, summary: &str) -> String {
    format!(
        "📂 *Repo*: {repo}\n\
         ✅ *PR #{number} Merged* — <{url}|{title}>\n\
         🔀 *Branch*: `{head}` → `{base}`\n\
         📝 *Summary*:\n\
         >{summary}",
        repo = pr.repo_name,
        number = pr.number,
        url = pr.url,
        title = pr.title,
        head = pr.head_ref_name,
        base = pr.base_ref_name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget_fix() -> PullRequest {
        serde_json::from_str(
            r#"{"number":7,"title":"Fix bug","url":"https://github.com/acme/widgets/pull/7","headRefName":"fix-bug","baseRefName":"main","body":"ignored"}"#,
        )
        .unwrap()
    }

    #[test]
    fn renders_fixed_template() {
        let text = format_message(&widget_fix(), "Fixed the widget crash");
        assert_eq!(
            text,
            "📂 *Repo*: widgets\n\
             ✅ *PR #7 Merged* — <https://github.com/acme/widgets/pull/7|Fix bug>\n\
             🔀 *Branch*: `fix-bug` → `main`\n\
             📝 *Summary*:\n\
             >Fixed the widget crash"
        );
    }

    #[test]
    fn sections_keep_their_order() {
        let text = format_message(&widget_fix(), "s");
        let labels = ["*Repo*", "*PR #7 Merged*", "*Branch*", "*Summary*"];
        let positions: Vec<usize> = labels.iter().map(|l| text.find(l).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn summary_is_not_escaped() {
        let summary = "Handles <tags> & `ticks`\nsecond line *bold*";
        let text = format_message(&widget_fix(), summary);
        assert!(text.ends_with(&format!(">{summary}")));
    }

    #[test]
    fn body_is_not_rendered() {
        let text = format_message(&widget_fix(), "s");
        assert!(!text.contains("ignored"));
    }
}
