use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters escaped by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// `https://wa.me/<number>?text=<encoded message>`
pub fn whatsapp_link(number: &str, message: &str) -> String {
    format!(
        "https://wa.me/{number}?text={}",
        encode_uri_component(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(encode_uri_component("a b\nc"), "a%20b%0Ac");
        assert_eq!(encode_uri_component("*--Mural--*"), "*--Mural--*");
        assert_eq!(encode_uri_component("I'm (here)!~"), "I'm%20(here)!~");
        assert_eq!(encode_uri_component("a&b=c?d/e#f"), "a%26b%3Dc%3Fd%2Fe%23f");
        assert_eq!(encode_uri_component("• é"), "%E2%80%A2%20%C3%A9");
    }

    #[test]
    fn builds_wa_me_link() {
        assert_eq!(
            whatsapp_link("9176425811", "Hi there"),
            "https://wa.me/9176425811?text=Hi%20there"
        );
    }
}
