//! Submit gate behaviour of the registration form
//!
//! Starts from a fully valid form and breaks one field at a time, checking
//! that the gate closes and that the report blames exactly that field.

use gradedesk_validation::{
    check_password_requirements, is_form_valid, is_password_valid, validate_email,
    validate_full_name, validate_phone, validate_username, Field, FormReport, RegistrationInput,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

const FULL_NAME: &str = "Иванов Алексей";
const PHONE: &str = "+7 (900) 123-45-67";
const EMAIL: &str = "teacher@school.ru";
const USERNAME: &str = "math_teacher";
const PASSWORD: &str = "Kx8#mq2!Lp";

fn valid_input() -> RegistrationInput {
    RegistrationInput {
        full_name: FULL_NAME.to_string(),
        phone: PHONE.to_string(),
        email: EMAIL.to_string(),
        username: USERNAME.to_string(),
        password1: PASSWORD.to_string(),
        password2: PASSWORD.to_string(),
    }
}

fn gate(input: &RegistrationInput) -> bool {
    is_form_valid(
        &input.full_name,
        &input.phone,
        &input.email,
        &input.username,
        &input.password1,
        &input.password2,
    )
}

#[test]
fn valid_form_opens_the_gate() {
    let input = valid_input();
    assert!(gate(&input));
    assert!(FormReport::evaluate(&input).is_valid());
}

#[rstest]
#[case::full_name(Field::FullName, "Иванов")]
#[case::phone(Field::Phone, "+7 (900) 123-45")]
#[case::email(Field::Email, "teacher.school.ru")]
#[case::username(Field::Username, "math teacher")]
#[case::password(Field::Password1, "qwerty123")]
#[case::confirmation(Field::Password2, "Kx8#mq2!Lq")]
fn one_invalid_field_closes_the_gate(#[case] field: Field, #[case] value: &str) {
    let mut input = valid_input();
    input.set(field, value);

    assert!(!gate(&input));

    let report = FormReport::evaluate(&input);
    assert!(!report.is_valid());
    // A changed password no longer matches its confirmation
    let expected = match field {
        Field::Password1 => vec![Field::Password1, Field::Password2],
        other => vec![other],
    };
    assert_eq!(report.invalid_fields(), expected);
}

#[test]
fn matching_but_weak_password_closes_the_gate() {
    let mut input = valid_input();
    input.password1 = "math_teacher2024".to_string();
    input.password2 = "math_teacher2024".to_string();

    let report = FormReport::evaluate(&input);
    assert!(!gate(&input));
    assert_eq!(report.invalid_fields(), vec![Field::Password1]);
    assert!(!report.password.not_personal);
}

#[test]
fn empty_passwords_never_match() {
    let mut input = valid_input();
    input.password1.clear();
    input.password2.clear();
    assert!(!gate(&input));
}

#[test]
fn report_agrees_with_gate_on_every_single_field_edit() {
    let candidates = ["", " ", "Петров Иван", "a@b.co", "89001234567", "john_doe1", PASSWORD];
    for field in Field::ALL {
        for value in candidates {
            let mut input = valid_input();
            input.set(field, value);
            assert_eq!(
                FormReport::evaluate(&input).is_valid(),
                gate(&input),
                "field {field} = {value:?}"
            );
        }
    }
}

#[rstest]
#[case("Иванов Алексей", true)]
#[case("Иванов", false)]
#[case("Ivan123", false)]
fn full_name_examples(#[case] name: &str, #[case] expected: bool) {
    assert_eq!(validate_full_name(name), expected);
}

#[rstest]
#[case("a@b.co", true)]
#[case("a.b.co", false)]
#[case("a @b.co", false)]
fn email_examples(#[case] email: &str, #[case] expected: bool) {
    assert_eq!(validate_email(email), expected);
}

#[rstest]
#[case("john_doe1", true)]
#[case("john doe", false)]
fn username_examples(#[case] username: &str, #[case] expected: bool) {
    assert_eq!(validate_username(username), expected);
}

#[rstest]
#[case("+7 (900) 123-45-67", true)]
#[case("12345", false)]
fn phone_examples(#[case] phone: &str, #[case] expected: bool) {
    assert_eq!(validate_phone(phone), expected);
}

#[test]
fn common_password_with_blank_personal_info() {
    let req = check_password_requirements("password", "", "", "");
    assert!(!req.not_common);
    assert!(req.length && req.latin && req.not_only_digits && req.not_personal);
    assert!(!is_password_valid(&req));
}

#[test]
fn personal_info_is_matched_case_insensitively() {
    let req = check_password_requirements("Ivan12345", "Иван Петров", "ivan@x.com", "ivan");
    assert!(!req.not_personal);
}

#[rstest]
#[case("Abcdef1!", true)]
#[case("Abcde1!", false)]
fn length_boundary(#[case] password: &str, #[case] expected: bool) {
    assert_eq!(check_password_requirements(password, "", "", "").length, expected);
}

#[test]
fn validators_are_idempotent() {
    let input = valid_input();
    for _ in 0..2 {
        assert!(validate_full_name(FULL_NAME));
        assert!(validate_phone(PHONE));
        assert!(validate_email(EMAIL));
        assert!(validate_username(USERNAME));
    }
    assert_eq!(FormReport::evaluate(&input), FormReport::evaluate(&input));
    assert_eq!(
        check_password_requirements(PASSWORD, FULL_NAME, EMAIL, USERNAME),
        check_password_requirements(PASSWORD, FULL_NAME, EMAIL, USERNAME)
    );
}
