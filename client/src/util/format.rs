//! Display formatting for dates and ages.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Human age from months: "3 meses", "1 año", "2 años y 1 mes".
pub fn format_age(months: Option<u32>) -> String {
    let Some(months) = months else {
        return "Edad desconocida".to_owned();
    };
    let years = months / 12;
    let rest = months % 12;
    let plural = |n: u32, one: &str, many: &str| format!("{n} {}", if n == 1 { one } else { many });
    match (years, rest) {
        (0, 0) => "Recién nacido".to_owned(),
        (0, m) => plural(m, "mes", "meses"),
        (y, 0) => plural(y, "año", "años"),
        (y, m) => format!("{} y {}", plural(y, "año", "años"), plural(m, "mes", "meses")),
    }
}

/// Calendar date part of an RFC 3339 timestamp, `DD/MM/YYYY`.
pub fn format_date(timestamp: &str) -> String {
    let date = timestamp.get(..10).unwrap_or(timestamp);
    let mut parts = date.splitn(3, '-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(y), Some(m), Some(d)) if y.len() == 4 && m.len() == 2 && d.len() == 2 => format!("{d}/{m}/{y}"),
        _ => timestamp.to_owned(),
    }
}

/// Today's local date as `YYYY-MM-DD`; `None` outside the browser.
pub fn today_iso() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        Some(format!("{:04}-{:02}-{:02}", now.get_full_year(), now.get_month() + 1, now.get_date()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
