//! Password reset email content

/// Subject line of every reset email
pub const SUBJECT: &str = "Password Reset Verification Code";

/// The reset code email, rendered as plain text and HTML
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationEmail<'a> {
    pub code: &'a str,
    /// Account display name; omitted from the greeting when absent
    pub display_name: Option<&'a str>,
    pub expiration_minutes: i64,
    /// Product name used in the signature
    pub app_name: &'a str,
}

impl VerificationEmail<'_> {
    pub fn subject(&self) -> &'static str {
        SUBJECT
    }

    pub fn greeting(&self) -> String {
        match self.display_name.map(str::trim).filter(|name| !name.is_empty()) {
            Some(name) => format!("Hello {},", name),
            None => "Hello,".to_string(),
        }
    }

    fn expiry_notice(&self) -> String {
        format!(
            "This code will expire in {} minutes. If you did not request this, please ignore this email.",
            self.expiration_minutes
        )
    }

    pub fn text_body(&self) -> String {
        format!(
            "{}\n\n\
            You requested to reset your password. Use the verification code below:\n\n\
            {}\n\n\
            {}\n\n\
            Thanks,\n\
            {} Team\n",
            self.greeting(),
            self.code,
            self.expiry_notice(),
            self.app_name
        )
    }

    pub fn html_body(&self) -> String {
        format!(
            r#"<!DOCTYPE html>
<html>
<body style="font-family: Arial, sans-serif; color: #333333;">
  <p>{greeting}</p>
  <p>You requested to reset your password. Use the verification code below:</p>
  <p style="font-size: 24px; font-weight: bold; letter-spacing: 4px;">{code}</p>
  <p>{notice}</p>
  <p>Thanks,<br>{app_name} Team</p>
</body>
</html>
"#,
            greeting = escape_html(&self.greeting()),
            code = escape_html(self.code),
            notice = escape_html(&self.expiry_notice()),
            app_name = escape_html(self.app_name),
        )
    }
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
