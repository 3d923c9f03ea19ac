use svatky::{CalendarDate, CelebrationService, Celebrations};

fn service() -> CelebrationService {
    CelebrationService::czech().expect("bundled tables")
}

fn date(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::from_ymd(year, month, day).expect("valid date")
}

#[test]
fn name_day_only() {
    let service = service();
    let day = date(2025, 1, 2);

    let with_emojis = service.daily_greeting(day, true).unwrap();
    assert_eq!(with_emojis, "🎂 Dnes má svátek Karina");

    let without_emojis = service.daily_greeting(day, false).unwrap();
    assert!(!without_emojis.contains('🎂'));
    assert_eq!(without_emojis, "Dnes má svátek Karina");
}

#[test]
fn holiday_only() {
    let service = service();
    let day = date(2025, 1, 1);

    assert_eq!(service.daily_greeting(day, true).unwrap(), "🎊 Dnes je Nový rok");

    let without_emojis = service.daily_greeting(day, false).unwrap();
    assert!(!without_emojis.contains('🎊'));
    assert_eq!(without_emojis, "Dnes je Nový rok");
}

#[test]
fn holiday_and_name_day() {
    let service = service();
    let christmas_eve = date(2025, 12, 24);
    assert_eq!(
        service.daily_greeting(christmas_eve, true).unwrap(),
        "🎄 Dnes je Štědrý den a 🎂 svátek má Adam a Eva"
    );
    assert_eq!(
        service.daily_greeting(christmas_eve, false).unwrap(),
        "Dnes je Štědrý den a svátek má Adam a Eva"
    );

    let easter_sunday = date(2025, 4, 20);
    assert_eq!(
        service.daily_greeting(easter_sunday, true).unwrap(),
        "🐰 Dnes je Velikonoční neděle a 🎂 svátek má Marcela"
    );
}

#[test]
fn valentines_day_is_a_name_day() {
    let service = service();
    let greeting = service.daily_greeting(date(2025, 2, 14), true).unwrap();
    assert!(greeting.contains("Valentýn"));
}

#[test]
fn holiday_emojis_follow_keywords() {
    let service = service();
    // 1 May has no name day.
    assert_eq!(
        service.daily_greeting(date(2025, 5, 1), true).unwrap(),
        "👷 Dnes je Svátek práce"
    );
    // 26 Dec carries both a holiday and Štěpán.
    assert_eq!(
        service.daily_greeting(date(2025, 12, 26), true).unwrap(),
        "🎄 Dnes je 2. svátek vánoční a 🎂 svátek má Štěpán"
    );
}

#[test]
fn nothing_to_celebrate_is_empty() {
    let service = svatky::CelebrationService::builder().build();
    assert_eq!(service.daily_greeting(date(2025, 3, 15), true).unwrap(), "");
    assert_eq!(service.daily_greeting(date(2025, 3, 15), false).unwrap(), "");
}

#[test]
fn default_greeting_uses_emojis() {
    let service = service();
    assert_eq!(
        service.greeting(date(2025, 1, 2)).unwrap(),
        service.daily_greeting(date(2025, 1, 2), true).unwrap()
    );
}
