/// An outgoing contact e-mail, already rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub subject: String,
    pub html_body: String,
    pub reply_to: String,
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

pub fn compose(name: &str, email: &str, message: &str) -> Notification {
    let html_body = format!(
        "<h2>New Contact Message</h2>\n\
         <p><strong>Name:</strong> {}</p>\n\
         <p><strong>Email:</strong> {}</p>\n\
         <p><strong>Message:</strong></p>\n\
         <p>{}</p>\n",
        escape_html(name),
        escape_html(email),
        escape_html(message).replace('\n', "<br>"),
    );

    Notification {
        subject: format!("New Contact from {name}"),
        html_body,
        reply_to: email.to_string(),
    }
}

#[cfg(test)]
mod notification_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("plain", "plain")]
    #[case("<b>hi</b>", "&lt;b&gt;hi&lt;/b&gt;")]
    #[case("Tom & \"Jerry\" 'ok'", "Tom &amp; &quot;Jerry&quot; &#39;ok&#39;")]
    fn it_should_escape_markup(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(escape_html(raw), expected);
    }

    #[rstest]
    fn it_should_compose_subject_body_and_reply_to() {
        let notification = compose("Ada", "ada@example.com", "Hello\n<script>x</script>");

        assert_eq!(notification.subject, "New Contact from Ada");
        assert_eq!(notification.reply_to, "ada@example.com");
        assert!(notification.html_body.contains("<strong>Name:</strong> Ada"));
        assert!(notification.html_body.contains("Hello<br>&lt;script&gt;x&lt;/script&gt;"));
        assert!(!notification.html_body.contains("<script>"));
    }
}
