//! End-to-end flow: load the catalog through the deduplicating cache, drive
//! the search session, and assign a selected lecture to a table.

use futures::future::BoxFuture;
use futures::FutureExt;
use lectern::{
    CachedSource, CatalogError, DatasetKey, DayCode, Lecture, LectureRepository, LectureSource,
    PlacedSlot, ScheduleSink, SearchContext, SearchSession,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

fn lecture(id: &str, title: &str, major: &str, grade: u8, credits: &str, schedule: Option<&str>) -> Lecture {
    Lecture {
        id: id.to_string(),
        title: title.to_string(),
        major: major.to_string(),
        grade,
        credits: credits.to_string(),
        schedule: schedule.map(str::to_string),
    }
}

/// In-memory source counting physical fetches per dataset.
struct FixtureSource {
    majors: Vec<Lecture>,
    liberal: Vec<Lecture>,
    majors_fetches: AtomicUsize,
    liberal_fetches: AtomicUsize,
}

impl FixtureSource {
    fn new(majors: Vec<Lecture>, liberal: Vec<Lecture>) -> Arc<Self> {
        Arc::new(Self {
            majors,
            liberal,
            majors_fetches: AtomicUsize::new(0),
            liberal_fetches: AtomicUsize::new(0),
        })
    }
}

impl LectureSource for FixtureSource {
    fn fetch(&self, dataset: DatasetKey) -> BoxFuture<'static, Result<Vec<Lecture>, CatalogError>> {
        let payload = match dataset {
            DatasetKey::Majors => {
                self.majors_fetches.fetch_add(1, Ordering::SeqCst);
                self.majors.clone()
            }
            DatasetKey::LiberalArts => {
                self.liberal_fetches.fetch_add(1, Ordering::SeqCst);
                self.liberal.clone()
            }
        };
        async move { Ok(payload) }.boxed()
    }
}

#[derive(Default)]
struct TableStore {
    tables: Mutex<Vec<(String, Vec<PlacedSlot>)>>,
}

impl ScheduleSink for TableStore {
    fn append(&self, table_id: &str, slots: Vec<PlacedSlot>) {
        self.tables
            .lock()
            .unwrap()
            .push((table_id.to_string(), slots));
    }
}

fn fixture_majors(count: usize) -> Vec<Lecture> {
    (0..count)
        .map(|i| {
            lecture(
                &format!("CS{i:03}"),
                &format!("Major Course {i}"),
                "CS",
                (i % 4 + 1) as u8,
                "3",
                Some("Mon1~3(201)"),
            )
        })
        .collect()
}

#[tokio::test]
async fn test_catalog_load_and_incremental_pagination() {
    // 40 majors + 10 liberal-arts per payload, x3 rounds = 150 lectures.
    let liberal: Vec<Lecture> = (0..10)
        .map(|i| {
            lecture(
                &format!("GE{i:03}"),
                &format!("Liberal Course {i}"),
                "Liberal Arts",
                1,
                "2",
                None,
            )
        })
        .collect();
    let source = FixtureSource::new(fixture_majors(40), liberal);

    let repository = LectureRepository::new(CachedSource::new(source.clone()));
    let catalog = repository.load_all().await.unwrap();

    // Six logical calls collapse to one physical fetch per dataset.
    assert_eq!(source.majors_fetches.load(Ordering::SeqCst), 1);
    assert_eq!(source.liberal_fetches.load(Ordering::SeqCst), 1);
    assert_eq!(catalog.len(), 150);

    let mut session = SearchSession::new(catalog);
    assert_eq!(session.filtered().len(), 150);
    assert_eq!(session.last_page(), 2);
    assert_eq!(session.visible().len(), 100);

    session.sentinel_reached();
    assert_eq!(session.visible().len(), 150);

    // Trigger at the last page is idempotent.
    session.sentinel_reached();
    assert_eq!(session.visible().len(), 150);
    assert_eq!(session.cursor(), 2);

    // Majors of the unfiltered catalog, regardless of any filter.
    session
        .update_option(|o| {
            o.set_majors(vec!["CS".to_string()]);
            Ok(())
        })
        .unwrap();
    assert_eq!(session.all_majors(), &["CS", "Liberal Arts"]);
    assert_eq!(session.cursor(), 1);
    assert_eq!(session.visible().len(), 100);
}

#[tokio::test]
async fn test_grade_filter_and_reset_behavior() {
    let source = FixtureSource::new(
        vec![lecture(
            "CS101",
            "Intro",
            "CS",
            1,
            "3",
            Some("Mon1~3"),
        )],
        vec![],
    );
    let repository = LectureRepository::new(CachedSource::new(source));
    let catalog = repository.load_all().await.unwrap();
    assert_eq!(catalog.len(), 3); // one lecture per round

    let mut session = SearchSession::new(catalog);

    session.update_option(|o| o.set_grades(vec![2])).unwrap();
    assert!(session.filtered().is_empty());

    session.update_option(|o| o.set_grades(vec![])).unwrap();
    assert_eq!(session.filtered().len(), 3);
}

#[tokio::test]
async fn test_select_appends_parsed_slots_to_table() {
    let source = FixtureSource::new(fixture_majors(5), vec![]);
    let repository = LectureRepository::new(CachedSource::new(source));
    let catalog = repository.load_all().await.unwrap();

    let mut session = SearchSession::new(catalog);
    session.apply_context(SearchContext {
        table_id: "schedule-1".to_string(),
        day: Some(DayCode::Mon),
        time: Some(2),
    });
    assert_eq!(session.option().days(), &[DayCode::Mon]);
    assert_eq!(session.option().times(), &[2]);
    assert!(!session.filtered().is_empty());

    let store = TableStore::default();
    assert!(session.select(0, &store));

    let tables = store.tables.lock().unwrap();
    let (table_id, slots) = &tables[0];
    assert_eq!(table_id, "schedule-1");
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].slot.day, DayCode::Mon);
    assert_eq!(slots[0].slot.range, vec![1, 2, 3]);
    assert_eq!(slots[0].slot.room.as_deref(), Some("201"));
    assert_eq!(slots[0].lecture.id, session.visible()[0].id);
}
