//! Unit tests for wn-board.

use wn_core::{Coordinate, TaskId, TaskPriority, TaskStatus, Timestamp};

use crate::{Task, TaskBoard};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn task(id: u64, lat: f64, lon: f64, status: TaskStatus) -> Task {
    Task {
        id:          TaskId(id),
        title:       format!("Task {id}"),
        address:     String::new(),
        location:    Coordinate::new(lat, lon).unwrap(),
        priority:    TaskPriority::Medium,
        status,
        reported_at: Timestamp::ZERO,
    }
}

/// Four Kolkata-area tasks: three open, one resolved.
/// 102 is ~0.19 km north of 101; 103 is ~8.8 km southwest.
fn sample_board() -> TaskBoard {
    TaskBoard::new(
        vec![
            task(101, 22.5743, 88.4348, TaskStatus::Reported),
            task(102, 22.5760, 88.4348, TaskStatus::Assigned),
            task(103, 22.5550, 88.3512, TaskStatus::InProgress),
            task(104, 22.5800, 88.4400, TaskStatus::Resolved),
        ],
        Timestamp::from_unix_secs(100),
    )
    .unwrap()
}

// ── TaskBoard ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod board {
    use crate::BoardError;

    use super::*;

    #[test]
    fn lookup_by_id() {
        let board = sample_board();
        assert_eq!(board.get(TaskId(103)).unwrap().id, TaskId(103));
        assert!(board.get(TaskId(999)).is_none());
        assert!(board.contains(TaskId(101)));
        assert!(!board.contains(TaskId(999)));
    }

    #[test]
    fn preserves_fetch_order() {
        let board = sample_board();
        let ids: Vec<u64> = board.iter().map(|t| t.id.raw()).collect();
        assert_eq!(ids, vec![101, 102, 103, 104]);
    }

    #[test]
    fn counts() {
        let board = sample_board();
        assert_eq!(board.len(), 4);
        assert_eq!(board.open_count(), 3);
        assert_eq!(board.count_with_status(TaskStatus::Resolved), 1);
        assert_eq!(board.count_with_status(TaskStatus::Reported), 1);
    }

    #[test]
    fn open_tasks_skips_resolved() {
        let board = sample_board();
        assert!(board.open_tasks().all(|t| t.id != TaskId(104)));
        assert_eq!(board.open_tasks().count(), 3);
    }

    #[test]
    fn duplicate_id_rejected() {
        let result = TaskBoard::new(
            vec![
                task(7, 22.57, 88.43, TaskStatus::Reported),
                task(7, 22.58, 88.44, TaskStatus::Assigned),
            ],
            Timestamp::ZERO,
        );
        assert!(matches!(result, Err(BoardError::DuplicateTask(TaskId(7)))));
    }

    #[test]
    fn empty_board() {
        let board = TaskBoard::empty();
        assert!(board.is_empty());
        assert_eq!(board.open_count(), 0);
        assert_eq!(board.fetched_at(), Timestamp::ZERO);
    }

    #[test]
    fn snapshot_age() {
        let board = sample_board(); // fetched at 100 s
        assert_eq!(board.age_ms(Timestamp::from_unix_secs(103)), 3_000);
        // Clock stepped backwards: age saturates, never negative.
        assert_eq!(board.age_ms(Timestamp::from_unix_secs(99)), 0);
    }
}

// ── TaskIndex ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod index {
    use crate::TaskIndex;

    use super::*;

    #[test]
    fn nearest_task() {
        let board = sample_board();
        let index = TaskIndex::over_open_tasks(&board);
        assert_eq!(index.len(), 3); // resolved 104 excluded

        let near_103 = Coordinate::new(22.5560, 88.3520).unwrap();
        assert_eq!(index.nearest(near_103), Some(TaskId(103)));
    }

    #[test]
    fn k_nearest_ordering() {
        let board = sample_board();
        let index = TaskIndex::over_open_tasks(&board);

        let at_101 = Coordinate::new(22.5743, 88.4348).unwrap();
        assert_eq!(index.k_nearest(at_101, 2), vec![TaskId(101), TaskId(102)]);
        // k larger than the index returns everything.
        assert_eq!(index.k_nearest(at_101, 10).len(), 3);
    }

    #[test]
    fn within_radius_exact_distances() {
        let board = sample_board();
        let index = TaskIndex::over_open_tasks(&board);

        let at_101 = Coordinate::new(22.5743, 88.4348).unwrap();
        let hits = index.within_radius_km(at_101, 1.0);

        // 101 at zero distance, 102 at ~0.19 km; 103 (~8.8 km) outside.
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].0, TaskId(101));
        assert!(hits[0].1 < 1e-6);
        assert_eq!(hits[1].0, TaskId(102));
        assert!((hits[1].1 - 0.18903).abs() < 1e-3, "got {}", hits[1].1);
    }

    #[test]
    fn within_radius_wide_catches_all() {
        let board = sample_board();
        let index = TaskIndex::over_open_tasks(&board);

        let at_101 = Coordinate::new(22.5743, 88.4348).unwrap();
        let hits = index.within_radius_km(at_101, 20.0);
        assert_eq!(hits.len(), 3);
        // Ascending by distance.
        assert!(hits.windows(2).all(|w| w[0].1 <= w[1].1));
    }

    #[test]
    fn zero_radius_and_empty_index() {
        let board = sample_board();
        let index = TaskIndex::over_open_tasks(&board);
        let at_101 = Coordinate::new(22.5743, 88.4348).unwrap();
        assert!(index.within_radius_km(at_101, 0.0).is_empty());

        let empty = TaskIndex::build(std::iter::empty());
        assert!(empty.is_empty());
        assert!(empty.nearest(at_101).is_none());
        assert!(empty.within_radius_km(at_101, 5.0).is_empty());
    }
}

// ── CSV Loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::{BoardError, load_tasks_reader};

    use super::*;

    const CSV: &[u8] = b"\
task_id,title,address,lat,lon,priority,status,reported_unix_ms\n\
101,Pothole on MG Road,12 MG Road,22.5743,88.4348,high,reported,1755850000000\n\
102,Broken streetlight,45 Park Street,22.5760,88.4348,medium,assigned,1755860000000\n\
103,\"Overflowing bin, east gate\",3 Lake Road,22.5550,88.3512,low,in_progress,1755870000000\n\
104,Fallen tree,9 Canal Bank,22.5800,88.4400,urgent,resolved,1755880000000\n\
";

    #[test]
    fn loads_all_rows() {
        let board = load_tasks_reader(Cursor::new(CSV), Timestamp::from_unix_secs(1)).unwrap();
        assert_eq!(board.len(), 4);
        assert_eq!(board.open_count(), 3);
        assert_eq!(board.fetched_at(), Timestamp::from_unix_secs(1));
    }

    #[test]
    fn field_mapping() {
        let board = load_tasks_reader(Cursor::new(CSV), Timestamp::ZERO).unwrap();
        let t = board.get(TaskId(101)).unwrap();
        assert_eq!(t.title, "Pothole on MG Road");
        assert_eq!(t.address, "12 MG Road");
        assert_eq!(t.priority, TaskPriority::High);
        assert_eq!(t.status, TaskStatus::Reported);
        assert_eq!(t.reported_at, Timestamp(1_755_850_000_000));
        assert!((t.location.lat() - 22.5743).abs() < 1e-9);
        assert!((t.location.lon() - 88.4348).abs() < 1e-9);
    }

    #[test]
    fn quoted_title_with_comma() {
        let board = load_tasks_reader(Cursor::new(CSV), Timestamp::ZERO).unwrap();
        assert_eq!(
            board.get(TaskId(103)).unwrap().title,
            "Overflowing bin, east gate"
        );
    }

    #[test]
    fn out_of_range_coordinate_reports_line() {
        let bad = b"\
task_id,title,address,lat,lon,priority,status,reported_unix_ms\n\
1,Ok task,Addr,22.57,88.43,low,reported,0\n\
2,Bad task,Addr,91.0,88.43,low,reported,0\n\
";
        let err = load_tasks_reader(Cursor::new(bad.as_slice()), Timestamp::ZERO).unwrap_err();
        // Bad record is the third CSV line (header is line 1).
        assert!(matches!(err, BoardError::InvalidCoordinate { row: 3, .. }));
    }

    #[test]
    fn unknown_priority_errors() {
        let bad = b"\
task_id,title,address,lat,lon,priority,status,reported_unix_ms\n\
1,Task,Addr,22.57,88.43,asap,reported,0\n\
";
        let err = load_tasks_reader(Cursor::new(bad.as_slice()), Timestamp::ZERO).unwrap_err();
        match err {
            BoardError::Parse(msg) => {
                assert!(msg.contains("row 2"), "got {msg}");
                assert!(msg.contains("unknown priority"), "got {msg}");
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn unknown_status_errors() {
        let bad = b"\
task_id,title,address,lat,lon,priority,status,reported_unix_ms\n\
1,Task,Addr,22.57,88.43,low,exploded,0\n\
";
        let err = load_tasks_reader(Cursor::new(bad.as_slice()), Timestamp::ZERO).unwrap_err();
        assert!(matches!(err, BoardError::Parse(_)));
    }

    #[test]
    fn duplicate_task_id_errors() {
        let bad = b"\
task_id,title,address,lat,lon,priority,status,reported_unix_ms\n\
7,First,Addr,22.57,88.43,low,reported,0\n\
7,Second,Addr,22.58,88.44,low,reported,0\n\
";
        let err = load_tasks_reader(Cursor::new(bad.as_slice()), Timestamp::ZERO).unwrap_err();
        assert!(matches!(err, BoardError::DuplicateTask(TaskId(7))));
    }

    #[test]
    fn non_numeric_lat_errors() {
        let bad = b"\
task_id,title,address,lat,lon,priority,status,reported_unix_ms\n\
1,Task,Addr,north,88.43,low,reported,0\n\
";
        let err = load_tasks_reader(Cursor::new(bad.as_slice()), Timestamp::ZERO).unwrap_err();
        assert!(matches!(err, BoardError::Parse(_)));
    }
}
