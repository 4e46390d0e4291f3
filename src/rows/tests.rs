//! Tests for the rows module

use super::*;
use crate::error::RowError;
use crate::types::{ColumnDef, DataType, Value, Width};

fn mixed_schema() -> Schema {
    Schema::new(vec![
        ColumnDef::new("a", DataType::SmallInt),
        ColumnDef::new("b", DataType::BigInt),
        ColumnDef::new("c", DataType::Real),
        ColumnDef::new("d", DataType::Varchar),
    ])
}

#[test]
fn registry_widths_are_bit_exact() {
    assert_eq!(DataType::SmallInt.width(), Width::Fixed(2));
    assert_eq!(DataType::Integer.width(), Width::Fixed(4));
    assert_eq!(DataType::BigInt.width(), Width::Fixed(8));
    assert_eq!(DataType::Real.width(), Width::Fixed(4));
    assert_eq!(DataType::DoublePrecision.width(), Width::Fixed(8));
    assert_eq!(DataType::Varchar.width(), Width::Variable);
}

#[test]
fn registry_fixed_size_mirrors_width() {
    assert_eq!(DataType::BigInt.fixed_size(), Some(8));
    assert_eq!(DataType::Varchar.fixed_size(), None);
    assert!(DataType::Varchar.is_variable());
    assert!(!DataType::Real.is_variable());
}

#[test]
fn registry_roundtrips_discriminants() {
    for tag in [
        DataType::SmallInt,
        DataType::Integer,
        DataType::BigInt,
        DataType::Real,
        DataType::DoublePrecision,
        DataType::Varchar,
    ] {
        assert_eq!(DataType::try_from(tag as u8).unwrap(), tag);
    }
    assert!(DataType::try_from(99).is_err());
}

#[test]
fn codec_widths_agree_with_registry() {
    assert_eq!(<i16 as FieldCodec>::WIDTH, DataType::SmallInt.fixed_size());
    assert_eq!(<u16 as FieldCodec>::WIDTH, DataType::SmallInt.fixed_size());
    assert_eq!(<i32 as FieldCodec>::WIDTH, DataType::Integer.fixed_size());
    assert_eq!(<u32 as FieldCodec>::WIDTH, DataType::Integer.fixed_size());
    assert_eq!(<i64 as FieldCodec>::WIDTH, DataType::BigInt.fixed_size());
    assert_eq!(<u64 as FieldCodec>::WIDTH, DataType::BigInt.fixed_size());
    assert_eq!(<f32 as FieldCodec>::WIDTH, DataType::Real.fixed_size());
    assert_eq!(
        <f64 as FieldCodec>::WIDTH,
        DataType::DoublePrecision.fixed_size()
    );
    assert_eq!(<Vec<u8> as FieldCodec>::WIDTH, None);
}

#[test]
fn cursor_starts_at_zero_and_advances_forward() {
    let mut cursor = RowCursor::new(10);
    assert_eq!(cursor.position(), 0);
    assert_eq!(cursor.remaining(), 10);
    assert!(cursor.has(10));
    assert!(!cursor.has(11));

    cursor.advance(4);
    assert_eq!(cursor.position(), 4);
    assert_eq!(cursor.remaining(), 6);

    cursor.advance(6);
    assert_eq!(cursor.remaining(), 0);
}

#[test]
fn fixed_codec_roundtrips_exact_widths() {
    let mut buf = [0u8; 8];

    assert_eq!((-7i16).encode_into(&mut buf), Some(2));
    assert_eq!(i16::decode_from(&buf), Some((-7i16, 2)));

    assert_eq!(3.5f32.encode_into(&mut buf), Some(4));
    assert_eq!(f32::decode_from(&buf), Some((3.5f32, 4)));

    assert_eq!(i64::MIN.encode_into(&mut buf), Some(8));
    assert_eq!(i64::decode_from(&buf), Some((i64::MIN, 8)));
}

#[test]
fn fixed_codec_rejects_short_buffers() {
    let mut buf = [0u8; 3];
    assert_eq!(42i32.encode_into(&mut buf), None);
    assert_eq!(i32::decode_from(&buf), None);
}

#[test]
fn varchar_codec_is_length_prefixed() {
    let payload = b"hello".to_vec();
    let mut buf = [0u8; 16];

    assert_eq!(payload.encoded_len(), 9);
    assert_eq!(payload.encode_into(&mut buf), Some(9));
    assert_eq!(&buf[..4], &5u32.to_le_bytes());
    assert_eq!(&buf[4..9], b"hello");

    let (decoded, read) = <Vec<u8>>::decode_from(&buf).unwrap();
    assert_eq!(read, 9);
    assert_eq!(decoded, b"hello");
}

#[test]
fn varchar_codec_rejects_truncated_payload() {
    let mut buf = [0u8; 6];
    buf[..4].copy_from_slice(&100u32.to_le_bytes());
    assert_eq!(<Vec<u8>>::decode_from(&buf), None);
}

#[test]
fn parse_writes_exact_width_for_integers() {
    let col = ColumnDef::new("n", DataType::Integer);
    let mut buf = [0u8; 4];

    let written = parse_field(&col, 0, "-123", &mut buf).unwrap();
    assert_eq!(written, 4);
    assert_eq!(i32::from_le_bytes(buf), -123);
}

#[test]
fn parse_tolerates_surrounding_whitespace() {
    let col = ColumnDef::new("n", DataType::SmallInt);
    let mut buf = [0u8; 2];

    assert_eq!(parse_field(&col, 0, " 7 ", &mut buf).unwrap(), 2);
    assert_eq!(i16::from_le_bytes(buf), 7);
}

#[test]
fn parse_rejects_out_of_range_literal() {
    let col = ColumnDef::new("n", DataType::Integer);
    let mut buf = [0u8; 4];

    let err = parse_field(&col, 2, "9999999999999999999999", &mut buf).unwrap_err();
    assert!(matches!(err, RowError::ParseFailure { column: 2, .. }));
    assert_eq!(buf, [0u8; 4], "no bytes written on failure");
}

#[test]
fn parse_rejects_malformed_literal() {
    let col = ColumnDef::new("n", DataType::BigInt);
    let mut buf = [0u8; 8];

    assert!(matches!(
        parse_field(&col, 0, "12abc", &mut buf),
        Err(RowError::ParseFailure { .. })
    ));
}

#[test]
fn parse_rejects_negative_literal_for_unsigned_column() {
    let col = ColumnDef::new_unsigned("n", DataType::SmallInt);
    let mut buf = [0u8; 2];

    assert!(matches!(
        parse_field(&col, 0, "-1", &mut buf),
        Err(RowError::ParseFailure { .. })
    ));

    assert_eq!(parse_field(&col, 0, "65535", &mut buf).unwrap(), 2);
    assert_eq!(u16::from_le_bytes(buf), u16::MAX);
}

#[test]
fn parse_accepts_range_unrepresentable_in_signed_width() {
    // 40000 overflows i16 but fits u16; signedness is per column.
    let signed = ColumnDef::new("s", DataType::SmallInt);
    let unsigned = ColumnDef::new_unsigned("u", DataType::SmallInt);
    let mut buf = [0u8; 2];

    assert!(parse_field(&signed, 0, "40000", &mut buf).is_err());
    assert_eq!(parse_field(&unsigned, 0, "40000", &mut buf).unwrap(), 2);
}

#[test]
fn parse_floats_into_ieee_widths() {
    let real = ColumnDef::new("r", DataType::Real);
    let double = ColumnDef::new("d", DataType::DoublePrecision);
    let mut buf = [0u8; 8];

    assert_eq!(parse_field(&real, 0, "3.5", &mut buf).unwrap(), 4);
    assert_eq!(f32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]), 3.5);

    assert_eq!(parse_field(&double, 0, "-2.25", &mut buf).unwrap(), 8);
    assert_eq!(f64::from_le_bytes(buf), -2.25);
}

#[test]
fn parse_varchar_writes_prefix_and_payload() {
    let col = ColumnDef::new("v", DataType::Varchar);
    let mut buf = [0u8; 16];

    let written = parse_field(&col, 0, "hello", &mut buf).unwrap();
    assert_eq!(written, 4 + 5);
    assert_eq!(&buf[..4], &5u32.to_le_bytes());
    assert_eq!(&buf[4..9], b"hello");
}

#[test]
fn parse_varchar_fails_when_destination_too_small() {
    let col = ColumnDef::new("v", DataType::Varchar);
    let mut buf = [0u8; 6];

    let err = parse_field(&col, 3, "too long", &mut buf).unwrap_err();
    assert!(matches!(err, RowError::ParseFailure { column: 3, .. }));
    assert_eq!(buf, [0u8; 6]);
}

#[test]
fn parse_empty_varchar_still_advances_by_prefix() {
    let col = ColumnDef::new("v", DataType::Varchar);
    let mut buf = [0u8; 4];

    assert_eq!(parse_field(&col, 0, "", &mut buf).unwrap(), 4);
    assert_eq!(buf, 0u32.to_le_bytes());
}

#[test]
fn schema_min_size_counts_present_columns_only() {
    let schema = mixed_schema();
    assert_eq!(schema.min_size(&[true, true, true, true]), 2 + 8 + 4 + 4);
    assert_eq!(schema.min_size(&[true, false, true, false]), 2 + 4);
    assert_eq!(schema.min_size(&[]), 0);
}

#[test]
fn schema_binary_size_is_exact_for_tuples() {
    let schema = mixed_schema();
    let tuple = ["7", "-42", "3.5", "ok"];
    assert_eq!(
        schema.binary_size(&[true; 4], &tuple),
        2 + 8 + 4 + (4 + 2)
    );
}

#[test]
fn to_binary_advances_in_column_order() {
    let schema = mixed_schema();
    let table = Table::in_memory(schema);
    let present = [true; 4];
    let tuple = ["7", "-42", "3.5", "ok"];

    let mut buf = vec![0u8; table.schema().binary_size(&present, &tuple)];
    let len = table.to_binary(&present, &tuple, &mut buf).unwrap();
    assert_eq!(len, 2 + 8 + 4 + 6);

    // Field boundaries are exactly the registered widths, in order.
    assert_eq!(i16::from_le_bytes([buf[0], buf[1]]), 7);
    assert_eq!(
        i64::from_le_bytes([
            buf[2], buf[3], buf[4], buf[5], buf[6], buf[7], buf[8], buf[9]
        ]),
        -42
    );
    assert_eq!(f32::from_le_bytes([buf[10], buf[11], buf[12], buf[13]]), 3.5);
    assert_eq!(&buf[14..18], &2u32.to_le_bytes());
    assert_eq!(&buf[18..20], b"ok");
}

#[test]
fn to_binary_skips_absent_columns() {
    let schema = mixed_schema();
    let table = Table::in_memory(schema);
    let present = [false, true, false, false];
    let tuple = ["", "99", "", ""];

    let mut buf = [0u8; 8];
    let len = table.to_binary(&present, &tuple, &mut buf).unwrap();
    assert_eq!(len, 8);
    assert_eq!(i64::from_le_bytes(buf), 99);
}

#[test]
fn to_binary_fails_on_missing_tuple_token() {
    let schema = mixed_schema();
    let table = Table::in_memory(schema);
    let mut buf = [0u8; 32];

    let err = table
        .to_binary(&[true; 4], &["7", "-42"], &mut buf)
        .unwrap_err();
    assert!(matches!(err, RowError::ParseFailure { column: 2, .. }));
}

#[test]
fn to_binary_aborts_on_first_failing_field() {
    let schema = mixed_schema();
    let table = Table::in_memory(schema);
    let present = [true; 4];
    let tuple = ["7", "not a number", "3.5", "ok"];

    let mut buf = vec![0u8; 32];
    let err = table.to_binary(&present, &tuple, &mut buf).unwrap_err();
    assert_eq!(err.column(), Some(1));
    // Later fields were never written.
    assert!(buf[2..].iter().all(|&b| b == 0));
}

#[test]
fn view_reads_back_mixed_row() {
    let schema = mixed_schema();
    let table = Table::in_memory(schema.clone());
    let present = [true; 4];
    let tuple = ["7", "-42", "3.5", "ok"];

    let mut buf = vec![0u8; schema.binary_size(&present, &tuple)];
    let len = table.to_binary(&present, &tuple, &mut buf).unwrap();

    let view = RowView::new(&buf[..len], &schema, &present).unwrap();
    assert_eq!(view.extent(), len);
    assert_eq!(view.get_smallint(0), Some(7));
    assert_eq!(view.get_bigint(1), Some(-42));
    assert_eq!(view.get_real(2), Some(3.5));
    assert_eq!(view.get_text(3), Some("ok"));
}

#[test]
fn view_values_carry_signedness() {
    let schema = Schema::new(vec![
        ColumnDef::new("s", DataType::Integer),
        ColumnDef::new_unsigned("u", DataType::Integer),
    ]);
    let table = Table::in_memory(schema.clone());
    let present = [true, true];

    let mut buf = [0u8; 8];
    let len = table
        .to_binary(&present, &["-5", "4000000000"], &mut buf)
        .unwrap();

    let view = RowView::new(&buf[..len], &schema, &present).unwrap();
    assert_eq!(view.value(0), Some(Value::Integer(-5)));
    assert_eq!(view.value(1), Some(Value::Uint(4_000_000_000)));
}

#[test]
fn view_marks_absent_columns() {
    let schema = mixed_schema();
    let table = Table::in_memory(schema.clone());
    let present = [true, false, false, true];
    let tuple = ["7", "", "", "hi"];

    let mut buf = [0u8; 16];
    let len = table.to_binary(&present, &tuple, &mut buf).unwrap();

    let view = RowView::new(&buf[..len], &schema, &present).unwrap();
    assert!(view.is_present(0));
    assert!(!view.is_present(1));
    assert_eq!(view.value(1), None);
    assert_eq!(view.get_text(3), Some("hi"));
}

#[test]
fn view_borrows_varchar_zero_copy() {
    let schema = Schema::new(vec![ColumnDef::new("v", DataType::Varchar)]);
    let table = Table::in_memory(schema.clone());
    let present = [true];

    let mut buf = [0u8; 9];
    table.to_binary(&present, &["hello"], &mut buf).unwrap();

    let view = RowView::new(&buf, &schema, &present).unwrap();
    let payload = view.get_varchar(0).unwrap();
    assert!(std::ptr::eq(payload.as_ptr(), buf[4..].as_ptr()));
}

#[test]
fn view_rejects_truncated_buffer() {
    let schema = mixed_schema();
    // 2-byte smallint present but only 1 byte of data.
    let err = RowView::new(&[0u8; 1], &schema, &[true; 4]).unwrap_err();
    assert!(matches!(
        err,
        RowError::WidthMismatch {
            column: 0,
            expected: 2,
            actual: 1
        }
    ));
}

#[test]
fn view_rejects_varchar_prefix_past_end() {
    let schema = Schema::new(vec![ColumnDef::new("v", DataType::Varchar)]);
    let mut buf = [0u8; 6];
    buf[..4].copy_from_slice(&100u32.to_le_bytes());

    assert!(matches!(
        RowView::new(&buf, &schema, &[true]),
        Err(RowError::WidthMismatch { .. })
    ));
}
