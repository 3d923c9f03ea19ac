use svatky::{CalendarDate, CelebrationService, Celebrations};

fn service() -> CelebrationService {
    CelebrationService::czech().expect("bundled tables")
}

fn date(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::from_ymd(year, month, day).expect("valid date")
}

#[test]
fn name_days_for_date() {
    let service = service();
    assert!(service.name_days_for_date(date(2025, 1, 1)).is_empty());
    assert_eq!(service.name_days_for_date(date(2025, 1, 2)), ["Karina"]);
    assert_eq!(
        service.name_days_for_date(date(2025, 1, 6)),
        ["Kašpar", "Melichar", "Baltazar"]
    );
}

#[test]
fn date_for_name() {
    let service = service();
    let karina = service.date_for_name("Karina", 2025).expect("Karina");
    assert_eq!((karina.month(), karina.day()), (1, 2));

    assert_eq!(
        service.date_for_name("karina", 2025),
        service.date_for_name("Karina", 2025)
    );
    assert_eq!(
        service.date_for_name("Kaspar", 2025),
        service.date_for_name("Kašpar", 2025)
    );
    assert_eq!(service.date_for_name("NonExistentName", 2025), None);
}

#[test]
fn date_for_name_follows_the_reference_year() {
    let service = service();
    assert_eq!(service.date_for_name("Josef", 2024), Some(date(2024, 3, 19)));
    assert_eq!(service.date_for_name("Josef", 2030), Some(date(2030, 3, 19)));
    assert_eq!(service.date_for_name("Horymír", 2025), Some(date(2025, 3, 1)));
}

#[test]
fn duplicate_names_resolve_to_first_table_entry() {
    let service = service();
    // Petr is listed on 02-22 and again beside Pavel on 06-29.
    assert_eq!(service.date_for_name("Petr", 2025), Some(date(2025, 2, 22)));
    assert_eq!(service.date_for_name("Pavel", 2025), Some(date(2025, 6, 29)));
}

#[test]
fn every_bundled_name_round_trips() {
    let service = service();
    for (key, names) in service.name_days().table().iter() {
        for name in names {
            if name == "Petr" {
                continue;
            }
            assert_eq!(service.date_key_for_name(name), Some(key), "{name}");
        }
    }
}

#[test]
fn holiday_for_date() {
    let service = service();
    assert_eq!(
        service.holiday_for_date(date(2025, 1, 1)).unwrap(),
        Some("Nový rok")
    );
    assert_eq!(
        service.holiday_for_date(date(2025, 12, 24)).unwrap(),
        Some("Štědrý den")
    );
    assert_eq!(service.holiday_for_date(date(2025, 3, 15)).unwrap(), None);
}

#[test]
fn name_day_greeting() {
    let service = service();
    assert_eq!(
        service.name_day_greeting(date(2025, 1, 2), None),
        "Dnes má svátek Karina"
    );
    assert_eq!(
        service.name_day_greeting(date(2025, 1, 6), None),
        "Dnes má svátek Kašpar, Melichar a Baltazar"
    );
    assert_eq!(
        service.name_day_greeting(date(2025, 1, 6), Some("Svátek slaví: {names}")),
        "Svátek slaví: Kašpar, Melichar a Baltazar"
    );
    assert_eq!(service.name_day_greeting(date(2025, 1, 1), None), "");
}

#[test]
fn holiday_announcement() {
    let service = service();
    assert_eq!(
        service.holiday_announcement(date(2025, 1, 1), None).unwrap(),
        Some("Dnes je Nový rok".to_string())
    );
    assert_eq!(
        service
            .holiday_announcement(date(2025, 1, 1), Some("Státní svátek: {holiday}"))
            .unwrap(),
        Some("Státní svátek: Nový rok".to_string())
    );
    assert_eq!(
        service.holiday_announcement(date(2025, 3, 15), None).unwrap(),
        None
    );
}

#[test]
fn lookups_are_shareable_across_threads() {
    let service = std::sync::Arc::new(service());
    let handles: Vec<_> = (2020..2028)
        .map(|year| {
            let service = service.clone();
            std::thread::spawn(move || {
                let names = service.name_days_for_date(date(year, 12, 24)).to_vec();
                let holiday = service
                    .holiday_for_date(date(year, 12, 24))
                    .unwrap()
                    .map(str::to_string);
                let josef = service.date_for_name("josef", year);
                (names, holiday, josef)
            })
        })
        .collect();
    for (year, handle) in (2020..2028).zip(handles) {
        let (names, holiday, josef) = handle.join().expect("thread");
        assert_eq!(names, ["Adam", "Eva"]);
        assert_eq!(holiday.as_deref(), Some("Štědrý den"));
        assert_eq!(josef, Some(date(year, 3, 19)));
    }
}
