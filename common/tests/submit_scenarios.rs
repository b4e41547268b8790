use common::model::notice::Severity;
use common::model::order::{
    LiveSketchField, MuralField, PersonalField, ShoeField, SketchField, TshirtField,
};
use common::order::{OrderComposer, SubmitOutcome};
use percent_encoding::percent_decode_str;

fn composer_with(fields: &[(common::model::order::FormField, &str)]) -> OrderComposer {
    let mut composer = OrderComposer::default();
    for (field, value) in fields {
        composer.set_field(*field, *value);
    }
    composer
}

fn decoded_text(url: &str) -> String {
    let (_, encoded) = url.split_once("?text=").expect("link carries a text parameter");
    percent_decode_str(encoded)
        .decode_utf8()
        .expect("valid utf-8")
        .into_owned()
}

#[test]
fn minimal_order_is_sent_with_personal_section_only() {
    let mut composer = composer_with(&[
        (PersonalField::Name.into(), "Asha"),
        (PersonalField::Phone.into(), "9876543210"),
    ]);

    let SubmitOutcome::Sent(handoff) = composer.submit() else {
        panic!("order should be accepted");
    };

    assert!(handoff.url.starts_with("https://wa.me/9176425811?text="));
    assert_eq!(decoded_text(&handoff.url), handoff.message);
    assert_eq!(handoff.message.matches("*--").count(), 1);
    assert!(handoff.message.contains(
        "*--Personal Information--*\n• Name: Asha\n• Phone: 9876543210\n\nThank you!"
    ));
    assert_eq!(handoff.message.matches("\n• ").count(), 2);
}

#[test]
fn missing_name_and_short_phone_are_both_reported() {
    let mut composer = composer_with(&[
        (PersonalField::Name.into(), ""),
        (PersonalField::Phone.into(), "123"),
    ]);

    let SubmitOutcome::Rejected { notices, focus } = composer.submit() else {
        panic!("order should be rejected");
    };

    let messages: Vec<&str> = notices.iter().map(|n| n.message.as_str()).collect();
    assert!(messages.contains(&"Name is required"));
    assert!(messages.contains(&"Please enter a valid phone number"));
    assert!(notices.iter().all(|n| n.severity == Severity::Error));
    assert_eq!(focus, Some(PersonalField::Name.into()));
    assert!(!composer.is_submitted());
}

#[test]
fn malformed_email_is_the_only_error() {
    let mut composer = composer_with(&[
        (PersonalField::Name.into(), "Raj"),
        (PersonalField::Phone.into(), "9998887776"),
        (PersonalField::Email.into(), "not-an-email"),
    ]);

    let SubmitOutcome::Rejected { notices, focus } = composer.submit() else {
        panic!("order should be rejected");
    };

    let messages: Vec<&str> = notices.iter().map(|n| n.message.as_str()).collect();
    assert_eq!(messages, ["Please enter a valid email"]);
    assert_eq!(focus, Some(PersonalField::Email.into()));
    assert!(!composer.validation().is_invalid(PersonalField::Name));
    assert!(!composer.validation().is_invalid(PersonalField::Phone));
}

#[test]
fn full_order_lists_every_section_in_order() {
    let mut composer = composer_with(&[
        (ShoeField::Description.into(), "Gold laces"),
        (ShoeField::Type.into(), "Sneaker"),
        (TshirtField::Color.into(), "Black"),
        (TshirtField::Size.into(), "M"),
        (MuralField::WallSize.into(), "10x12 ft"),
        (MuralField::Location.into(), "Chennai"),
        (LiveSketchField::Date.into(), "2026-11-02"),
        (LiveSketchField::Place.into(), "Wedding hall"),
        (SketchField::Type.into(), "Cartoon Sketch"),
        (SketchField::Size.into(), "A3"),
        (PersonalField::Address.into(), "12 Beach Road"),
        (PersonalField::Email.into(), "asha@example.com"),
        (PersonalField::Phone.into(), "9876543210"),
        (PersonalField::Name.into(), "Asha"),
    ]);

    let SubmitOutcome::Sent(handoff) = composer.submit() else {
        panic!("order should be accepted");
    };
    let message = handoff.message;

    let headers = [
        "*--Personal Information--*",
        "*--Sketch Details--*",
        "*--Live Sketch Event--*",
        "*--Mural Painting--*",
        "*--T-Shirt Design--*",
        "*--Shoe Customization--*",
    ];
    let positions: Vec<usize> = headers
        .iter()
        .map(|h| message.find(h).unwrap_or_else(|| panic!("missing {h}")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    assert!(message.contains("*--Sketch Details--*\n• Type: Cartoon Sketch\n• Size: A3\n\n"));
    assert!(message.contains("*--Live Sketch Event--*\n• Place: Wedding hall\n• Date: 2026-11-02\n\n"));
    assert!(message.contains("*--Mural Painting--*\n• Wall Size: 10x12 ft\n• Location: Chennai\n\n"));
    assert!(message.contains("*--T-Shirt Design--*\n• Size: M\n• Color: Black\n\n"));
    assert!(message.contains("*--Shoe Customization--*\n• Type: Sneaker\n• Description: Gold laces\n\n"));
    assert!(!message.contains("• Material:"));
    assert!(!message.contains("• Time:"));
}

#[test]
fn resubmitting_identical_form_yields_identical_link() {
    let mut composer = composer_with(&[
        (PersonalField::Name.into(), "Asha"),
        (PersonalField::Phone.into(), "9876543210"),
        (MuralField::Design.into(), "Peacock"),
    ]);

    let first = composer.submit();
    let second = composer.submit();
    assert_eq!(first, second);
}
