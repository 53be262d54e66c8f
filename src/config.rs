// Static site configuration. Everything here is plain data; the reactive
// behaviour lives in `scrollspy`, `navigation` and the carousel driver.

/// WhatsApp business number the CTA buttons deep-link to.
pub const WHATSAPP_PHONE: &str = "0595703977";

const WHATSAPP_PREFILL: &str = "Hi VirtualTech! I'd like to hear more about your virtual assistance services.";

/// wa.me deep link with the prefilled intent, opened in a new browsing context.
pub fn whatsapp_link() -> String {
    format!(
        "https://wa.me/{}?text={}",
        WHATSAPP_PHONE,
        urlencoding::encode(WHATSAPP_PREFILL)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_encodes_the_prefill() {
        let link = whatsapp_link();
        assert!(link.starts_with("https://wa.me/0595703977?text="));
        assert!(!link.contains(' '), "prefill must be urlencoded: {link}");
    }
}
