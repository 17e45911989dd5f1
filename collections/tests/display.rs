#![allow(missing_docs)]

use seq_collections::{CircularList, DynamicArray, Value};

#[test]
fn array_lines() {
    let mut list = DynamicArray::new();
    list.append_all(["alpha", "beta"]);
    list.append_start("zero");

    assert_eq!(
        list.to_string(),
        indoc::indoc! {"
            zero
            alpha
            beta
        "},
    );

    let mut out = Vec::new();
    list.reverse_show_to(&mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        indoc::indoc! {"
            beta
            alpha
            zero
        "},
    );
}

#[test]
fn circular_lines() {
    let list: CircularList<_> = [1.5, 2.5, 3.5].into_iter().collect();

    assert_eq!(
        list.to_string(),
        indoc::indoc! {"
            3.5
            2.5
            1.5
        "},
    );

    let mut out = Vec::new();
    list.reverse_show_to(&mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        indoc::indoc! {"
            1.5
            2.5
            3.5
        "},
    );
}

#[test]
fn typed_mixed_values() {
    let mut list = DynamicArray::new();
    list.append_all([
        Value::from("text"),
        Value::from(7),
        Value::from(2.25_f64),
        Value::from(0.5_f32),
        Value::from(9_000_000_000_i64),
        Value::from(true),
        Value::from('q'),
        Value::object("Point { x: 1 }"),
        Value::from(None::<i32>),
    ]);

    assert_eq!(
        list.typed().to_string(),
        indoc::indoc! {"

            Value: text Type: String
            Value: 7 Type: Integer
            Value: 2.25 Type: Double
            Value: 0.5 Type: Float
            Value: 9000000000 Type: Long
            Value: true Type: Boolean
            Value: q Type: Character
            Value: Point { x: 1 } Type: Object
            Value: null
        "},
    );
}

#[test]
fn typed_primitive_list() {
    let list: CircularList<_> = ['a', 'b'].into_iter().collect();

    assert_eq!(
        list.typed().to_string(),
        "\nValue: b Type: Character\nValue: a Type: Character\n",
    );

    let empty = DynamicArray::<String>::new();
    assert_eq!(empty.typed().to_string(), "\n");
}
