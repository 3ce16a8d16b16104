//! メッセージを文字列化する汎用トラバーサル。
//!
//! 括弧・区切り・フィールド名の出力はここで行い、各フィールド値の描画だけを
//! [`ToStringStyle`] に委譲する。

use crate::config::StyleConfig;
use crate::types::{FieldValue, Message, Value};

/// フィールド値を描画するフック。トラバーサルから宣言順に1フィールドずつ呼ばれる
pub trait ToStringStyle {
    fn append_detail(&self, buffer: &mut String, field_name: &str, value: &FieldValue);
}

pub fn reflection_to_string(message: &Message, config: &StyleConfig, style: &dyn ToStringStyle) -> String {
    log::trace!("メッセージ {} ({} フィールド) を文字列化します。", message.name, message.fields.len());
    let mut buffer = String::new();
    append_message(&mut buffer, message, config, style);
    buffer
}

fn append_message(buffer: &mut String, message: &Message, config: &StyleConfig, style: &dyn ToStringStyle) {
    if config.use_message_name {
        buffer.push_str(&message.name);
    }
    buffer.push_str(&config.content_start);

    for (index, field) in message.fields.iter().enumerate() {
        if index > 0 || config.field_separator_at_start {
            buffer.push_str(&config.field_separator);
        }
        buffer.push_str(&field.name);
        buffer.push_str(&config.field_name_value_separator);

        match &field.value {
            Some(value) => append_value(buffer, &field.name, value, config, style),
            None => buffer.push_str(&config.null_text),
        }
    }

    buffer.push_str(&config.content_end);
}

fn append_value(buffer: &mut String, field_name: &str, value: &Value, config: &StyleConfig, style: &dyn ToStringStyle) {
    match value {
        Value::Leaf(leaf) => style.append_detail(buffer, field_name, leaf),
        Value::Message(nested) => append_message(buffer, nested, config, style),
        Value::Repeated(items) => {
            buffer.push_str(&config.array_start);
            for (index, item) in items.iter().enumerate() {
                if index > 0 {
                    buffer.push_str(&config.array_separator);
                }
                append_value(buffer, field_name, item, config, style);
            }
            buffer.push_str(&config.array_end);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Scalar;

    // 値の描画を最小限に留め、骨組みだけを確認するためのスタイル
    struct PlainStyle;

    impl ToStringStyle for PlainStyle {
        fn append_detail(&self, buffer: &mut String, _field_name: &str, value: &FieldValue) {
            match value {
                FieldValue::Scalar(s) => buffer.push_str(&s.to_string()),
                _ => buffer.push('?'),
            }
        }
    }

    #[test]
    fn fields_are_emitted_in_declaration_order() {
        let message = Message::new("Ping")
            .with_field("message", Scalar::Str("hello".to_string()))
            .with_field("button_protection", Scalar::Bool(false));

        let text = reflection_to_string(&message, &StyleConfig::default(), &PlainStyle);

        assert_eq!(text, "Ping[\n  message=hello\n  button_protection=false\n]");
    }

    #[test]
    fn empty_message_keeps_brackets() {
        let text = reflection_to_string(&Message::new("Initialize"), &StyleConfig::default(), &PlainStyle);
        assert_eq!(text, "Initialize[\n]");
    }

    #[test]
    fn absent_value_renders_null_text() {
        let message = Message::new("Failure").with_absent("message");
        let text = reflection_to_string(&message, &StyleConfig::default(), &PlainStyle);
        assert_eq!(text, "Failure[\n  message=<null>\n]");
    }

    #[test]
    fn repeated_and_nested_values() {
        let inner = Message::new("HDNodeType").with_field("depth", Scalar::UInt(3));
        let message = Message::new("PublicKey")
            .with_field(
                "address_n",
                Value::Repeated(vec![Scalar::UInt(44).into(), Scalar::UInt(0).into()]),
            )
            .with_field("node", inner);

        let text = reflection_to_string(&message, &StyleConfig::default(), &PlainStyle);

        assert_eq!(
            text,
            "PublicKey[\n  address_n={44,0}\n  node=HDNodeType[\n  depth=3\n]\n]"
        );
    }

    #[test]
    fn config_controls_separators() {
        let config = StyleConfig {
            use_message_name: false,
            content_start: "{".to_string(),
            content_end: "}".to_string(),
            field_separator: ", ".to_string(),
            field_separator_at_start: false,
            field_name_value_separator: ": ".to_string(),
            ..StyleConfig::default()
        };
        let message = Message::new("Success")
            .with_field("code", Scalar::Int(1))
            .with_field("message", Scalar::Str("ok".to_string()));

        let text = reflection_to_string(&message, &config, &PlainStyle);

        assert_eq!(text, "{code: 1, message: ok}");
    }
}
