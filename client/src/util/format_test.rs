use super::*;

#[test]
fn age_in_months_and_years() {
    assert_eq!(format_age(None), "Edad desconocida");
    assert_eq!(format_age(Some(0)), "Recién nacido");
    assert_eq!(format_age(Some(1)), "1 mes");
    assert_eq!(format_age(Some(5)), "5 meses");
    assert_eq!(format_age(Some(12)), "1 año");
    assert_eq!(format_age(Some(25)), "2 años y 1 mes");
    assert_eq!(format_age(Some(30)), "2 años y 6 meses");
}

#[test]
fn dates_render_day_first() {
    assert_eq!(format_date("2024-03-07T10:00:00.000Z"), "07/03/2024");
    assert_eq!(format_date("2024-03-07"), "07/03/2024");
    assert_eq!(format_date("ayer"), "ayer");
}
