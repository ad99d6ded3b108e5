//! Email body for delivered codes

/// Subject and bodies of the code email
#[derive(Debug, Clone)]
pub struct CodeEmail {
    pub subject: String,
    pub text: String,
    pub html: String,
}

impl CodeEmail {
    /// Render the email for `code`, valid for `valid_minutes`
    pub fn render(code: &str, valid_minutes: i64) -> Self {
        let subject = "Your Idea Mandir OTP Code".to_string();
        let text = format!(
            "Your OTP code is: {code}\n\nPlease use this code to verify your account. \
             It expires in {valid_minutes} minutes."
        );
        let html = format!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px; border: 1px solid #e0e0e0; border-radius: 5px;">
  <h1 style="color: #333; text-align: center;">Your OTP Code</h1>
  <div style="font-size: 32px; font-weight: bold; text-align: center; padding: 20px; background-color: #f5f5f5; border-radius: 4px; letter-spacing: 5px; margin: 20px 0;">{code}</div>
  <p style="color: #666; line-height: 1.5;">Please use this code to verify your account. It expires in {valid_minutes} minutes.</p>
  <p style="color: #999; margin-top: 30px; font-size: 12px; text-align: center;">If you didn't request this code, please ignore this email.</p>
</div>"#
        );

        Self { subject, text, html }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_contains_code() {
        let email = CodeEmail::render("482913", 10);
        assert!(email.subject.contains("Idea Mandir"));
        assert!(email.text.contains("482913"));
        assert!(email.text.contains("10 minutes"));
        assert!(email.html.contains(">482913<"));
    }
}
