//! crates/lg-writer/src/encoder.rs
//! Line encoders for the text, JSON and testing formats.

use lg::{Fields, Level};
use time::OffsetDateTime;
use time::macros::format_description;

use crate::caller::Caller;
use crate::config::Config;
use crate::format::Format;

/// Keys written by the encoder itself in JSON output.
const RESERVED_JSON_KEYS: [&str; 4] = ["level", "timestamp", "caller", "message"];

/// One entry ready for encoding.
#[derive(Debug)]
pub(crate) struct Entry<'a> {
    pub(crate) time: Option<OffsetDateTime>,
    pub(crate) level: Level,
    pub(crate) caller: Option<Caller>,
    pub(crate) message: &'a str,
    pub(crate) fields: &'a Fields,
}

/// Encodes entries according to a [`Format`] and [`Config`].
///
/// The encoder only renders elements that are present in the [`Entry`]; the
/// emitting log decides presence from its configuration, so a disabled
/// element never leaves a separator or empty value behind.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Encoder {
    format: Format,
    config: Config,
}

impl Encoder {
    pub(crate) const fn new(format: Format, config: Config) -> Self {
        Self { format, config }
    }

    pub(crate) const fn format(&self) -> Format {
        self.format
    }

    pub(crate) const fn config(&self) -> Config {
        self.config
    }

    /// Current time in the configured zone, or `None` when timestamps are off.
    pub(crate) fn now(&self) -> Option<OffsetDateTime> {
        if !self.config.timestamp {
            return None;
        }
        if self.config.utc {
            return Some(OffsetDateTime::now_utc());
        }
        // The local offset is unavailable on some platforms once threads are running.
        Some(OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc()))
    }

    /// Appends the encoded entry, terminated by a single `\n`, to `out`.
    pub(crate) fn encode(&self, entry: &Entry<'_>, out: &mut Vec<u8>) -> serde_json::Result<()> {
        match self.format {
            Format::Json => self.encode_json(entry, out)?,
            Format::Text | Format::Testing => self.encode_text(entry, out)?,
        }
        out.push(b'\n');
        Ok(())
    }

    fn encode_text(&self, entry: &Entry<'_>, out: &mut Vec<u8>) -> serde_json::Result<()> {
        let testing = self.format == Format::Testing;
        let mut columns: Vec<String> = Vec::with_capacity(4);

        if let Some(time) = entry.time {
            let rendered = if testing {
                format_time_of_day(time)
            } else {
                format_rfc3339_millis(time)
            };
            columns.extend(rendered);
        }
        if self.config.level {
            if testing {
                columns.push(format!("{:<5}", entry.level));
            } else {
                columns.push(entry.level.to_string());
            }
        }
        if let Some(caller) = &entry.caller {
            columns.push(if testing {
                caller.short()
            } else {
                caller.trimmed()
            });
        }
        columns.push(entry.message.to_owned());

        out.extend_from_slice(columns.join("\t").as_bytes());
        if !entry.fields.is_empty() {
            out.push(b'\t');
            write_fields_object(entry.fields, out)?;
        }
        Ok(())
    }

    fn encode_json(&self, entry: &Entry<'_>, out: &mut Vec<u8>) -> serde_json::Result<()> {
        let mut object = JsonObject::start(out);
        if self.config.level {
            object.key_str("level", entry.level.as_lowercase_str())?;
        }
        if let Some(rendered) = entry.time.and_then(format_rfc3339_millis) {
            object.key_str("timestamp", &rendered)?;
        }
        if let Some(caller) = &entry.caller {
            object.key_str("caller", &caller.trimmed())?;
        }
        object.key_str("message", entry.message)?;
        for field in entry.fields {
            // A field named like a standard key moves under `fields.` so every key stays unique.
            if RESERVED_JSON_KEYS.contains(&field.key.as_str()) {
                object.key_value(&format!("fields.{}", field.key), &field.value)?;
            } else {
                object.key_value(&field.key, &field.value)?;
            }
        }
        object.finish();
        Ok(())
    }
}

fn write_fields_object(fields: &Fields, out: &mut Vec<u8>) -> serde_json::Result<()> {
    let mut object = JsonObject::start(out);
    for field in fields {
        object.key_value(&field.key, &field.value)?;
    }
    object.finish();
    Ok(())
}

/// Streams a JSON object with keys in the order they are written.
struct JsonObject<'a> {
    out: &'a mut Vec<u8>,
    first: bool,
}

impl<'a> JsonObject<'a> {
    fn start(out: &'a mut Vec<u8>) -> Self {
        out.push(b'{');
        Self { out, first: true }
    }

    fn key(&mut self, key: &str) -> serde_json::Result<()> {
        if !self.first {
            self.out.push(b',');
        }
        self.first = false;
        serde_json::to_writer(&mut *self.out, key)?;
        self.out.push(b':');
        Ok(())
    }

    fn key_str(&mut self, key: &str, value: &str) -> serde_json::Result<()> {
        self.key(key)?;
        serde_json::to_writer(&mut *self.out, value)
    }

    fn key_value(&mut self, key: &str, value: &lg::Value) -> serde_json::Result<()> {
        self.key(key)?;
        serde_json::to_writer(&mut *self.out, value)
    }

    fn finish(self) {
        self.out.push(b'}');
    }
}

/// RFC 3339 with millisecond precision; UTC renders as `Z`.
fn format_rfc3339_millis(time: OffsetDateTime) -> Option<String> {
    let rendered = if time.offset().is_utc() {
        time.format(format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
        ))
    } else {
        time.format(format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3][offset_hour sign:mandatory]:[offset_minute]"
        ))
    };
    rendered.ok()
}

fn format_time_of_day(time: OffsetDateTime) -> Option<String> {
    time.format(format_description!(
        "[hour]:[minute]:[second].[subsecond digits:6]"
    ))
    .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lg::Value;
    use time::macros::datetime;

    fn render(format: Format, config: Config, entry: &Entry<'_>) -> String {
        let mut out = Vec::new();
        Encoder::new(format, config)
            .encode(entry, &mut out)
            .expect("encoding succeeds");
        String::from_utf8(out).expect("utf-8")
    }

    fn entry<'a>(fields: &'a Fields, caller: Option<Caller>) -> Entry<'a> {
        Entry {
            time: None,
            level: Level::Warn,
            caller,
            message: "disk almost full",
            fields,
        }
    }

    #[test]
    fn text_joins_present_columns_with_tabs() {
        let fields = Fields::new();
        let caller = Some(Caller::new("crates/app/src/main.rs", 12));
        let line = render(Format::Text, Config::default(), &entry(&fields, caller));
        assert_eq!(line, "WARN\tsrc/main.rs:12\tdisk almost full\n");
    }

    #[test]
    fn text_omits_disabled_level_without_placeholder() {
        let fields = Fields::new();
        let line = render(Format::Text, Config::quiet(), &entry(&fields, None));
        assert_eq!(line, "disk almost full\n");
    }

    #[test]
    fn text_appends_fields_as_ordered_json() {
        let fields = Fields::new()
            .with("volume", Value::from("/data"))
            .with("pct", Value::from(93));
        let line = render(Format::Text, Config::quiet(), &entry(&fields, None));
        assert_eq!(line, "disk almost full\t{\"volume\":\"/data\",\"pct\":93}\n");
    }

    #[test]
    fn testing_pads_level_and_shortens_caller() {
        let fields = Fields::new();
        let caller = Some(Caller::new("crates/app/src/main.rs", 12));
        let line = render(Format::Testing, Config::default(), &entry(&fields, caller));
        assert_eq!(line, "WARN \tmain.rs:12\tdisk almost full\n");
    }

    #[test]
    fn json_orders_standard_keys_before_fields() {
        let fields = Fields::new().with("b", Value::from(1)).with("a", Value::from(2));
        let caller = Some(Caller::new("src/lib.rs", 4));
        let line = render(Format::Json, Config::default(), &entry(&fields, caller));
        assert_eq!(
            line,
            "{\"level\":\"warn\",\"caller\":\"src/lib.rs:4\",\"message\":\"disk almost full\",\"b\":1,\"a\":2}\n"
        );
    }

    #[test]
    fn json_fields_named_like_standard_keys_are_prefixed() {
        let fields = Fields::new()
            .with("message", Value::from("shadow"))
            .with("level", Value::from(3))
            .with("timestamp", Value::from(0))
            .with("caller", Value::from("me"))
            .with("user", Value::from("ada"));
        let mut e = entry(&fields, Some(Caller::new("src/lib.rs", 4)));
        e.time = Some(datetime!(2024-03-05 07:08:09 UTC));
        let line = render(Format::Json, Config::default(), &e);
        assert_eq!(
            line,
            "{\"level\":\"warn\",\"timestamp\":\"2024-03-05T07:08:09.000Z\",\"caller\":\"src/lib.rs:4\",\"message\":\"disk almost full\",\"fields.message\":\"shadow\",\"fields.level\":3,\"fields.timestamp\":0,\"fields.caller\":\"me\",\"user\":\"ada\"}\n"
        );

        let parsed: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(line.trim_end()).expect("valid json");
        assert_eq!(parsed.len(), 9);
        assert_eq!(parsed["message"], "disk almost full");
    }

    #[test]
    fn text_fields_keep_standard_names() {
        let fields = Fields::new().with("message", Value::from("shadow"));
        let line = render(Format::Text, Config::quiet(), &entry(&fields, None));
        assert_eq!(line, "disk almost full\t{\"message\":\"shadow\"}\n");
    }

    #[test]
    fn json_without_level_key() {
        let fields = Fields::new();
        let line = render(Format::Json, Config::quiet(), &entry(&fields, None));
        assert_eq!(line, "{\"message\":\"disk almost full\"}\n");
    }

    #[test]
    fn json_escapes_message() {
        let fields = Fields::new();
        let mut e = entry(&fields, None);
        e.message = "quote \" and\nnewline";
        let line = render(Format::Json, Config::quiet(), &e);
        assert_eq!(line, "{\"message\":\"quote \\\" and\\nnewline\"}\n");
    }

    #[test]
    fn rfc3339_millis_in_utc_and_offset() {
        assert_eq!(
            format_rfc3339_millis(datetime!(2024-03-05 07:08:09.123456 UTC)).as_deref(),
            Some("2024-03-05T07:08:09.123Z")
        );
        assert_eq!(
            format_rfc3339_millis(datetime!(2024-03-05 07:08:09.5 +02:00)).as_deref(),
            Some("2024-03-05T07:08:09.500+02:00")
        );
    }

    #[test]
    fn time_of_day_has_microseconds() {
        assert_eq!(
            format_time_of_day(datetime!(2024-03-05 09:48:38.849066 UTC)).as_deref(),
            Some("09:48:38.849066")
        );
    }

    #[test]
    fn timestamp_column_leads_text_output() {
        let fields = Fields::new();
        let mut e = entry(&fields, None);
        e.time = Some(datetime!(2024-03-05 07:08:09 UTC));
        let line = render(Format::Text, Config::default(), &e);
        assert_eq!(line, "2024-03-05T07:08:09.000Z\tWARN\tdisk almost full\n");
    }
}
