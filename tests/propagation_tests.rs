use asynczone::prelude::*;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::io;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

type Log = Arc<Mutex<Vec<(&'static str, Option<Value>)>>>;

fn child_zone() -> Zone {
    Zone::root()
        .fork(ZoneSpec::new("child_zone").with_property("a", 5))
        .unwrap()
}

fn record(log: &Log, label: &'static str) {
    log.lock().push((label, current_value("a")));
}

fn entries(log: &Log) -> Vec<(&'static str, Option<Value>)> {
    let mut entries = log.lock().clone();
    entries.sort_by_key(|(label, _)| *label);
    entries
}

#[test]
fn test_wrap_and_io_propagation() -> anyhow::Result<()> {
    let c = child_zone();
    let log = Log::default();

    let main_log = Arc::clone(&log);
    EventLoop::new()?.run(async move {
        let wrapped_log = Arc::clone(&main_log);
        let callback = c.bind(move |_stat: io::Result<std::fs::Metadata>| {
            record(&wrapped_log, "wrapped");
            let nested_log = Arc::clone(&wrapped_log);
            // should inherit the queuing zone
            read_metadata(".", move |_| record(&nested_log, "nested"));
        });
        read_metadata(".", move |stat| callback.call(stat));
        record(&main_log, "after_wrap");

        let root_log = Arc::clone(&main_log);
        read_metadata(".", move |_| record(&root_log, "root_io"));
        record(&main_log, "after_root_io");
    });

    assert_eq!(
        entries(&log),
        vec![
            ("after_root_io", None),
            ("after_wrap", None),
            ("nested", Some(json!(5))),
            ("root_io", None),
            ("wrapped", Some(json!(5))),
        ]
    );
    Ok(())
}

#[test]
fn test_run_returns_value_and_restores() {
    let c = child_zone();
    let result = c.run(|| {
        assert_eq!(current_value("a"), Some(json!(5)));
        12
    });

    assert_eq!(result, 12);
    assert_eq!(current_value("a"), None);
}

#[test]
fn test_timers_inherit_scheduling_zone() -> anyhow::Result<()> {
    let c = child_zone();
    let log = Log::default();

    let main_log = Arc::clone(&log);
    EventLoop::new()?.run(async move {
        c.run(|| {
            let log = Arc::clone(&main_log);
            let mut firings = 0;
            set_interval(Duration::from_millis(5), move |timer| {
                firings += 1;
                record(&log, if firings == 1 { "interval_1" } else { "interval_2" });
                if firings == 2 {
                    timer.clear();
                }
            });
        });
        record(&main_log, "after_interval");

        c.run(|| {
            let log = Arc::clone(&main_log);
            set_immediate(move || record(&log, "immediate"));
        });
        c.run(|| {
            let log = Arc::clone(&main_log);
            set_timeout(Duration::from_millis(5), move || record(&log, "timeout"));
        });
        c.run(|| {
            let log = Arc::clone(&main_log);
            next_tick(move || record(&log, "next_tick"));
        });
        record(&main_log, "after_all");
    });

    assert_eq!(
        entries(&log),
        vec![
            ("after_all", None),
            ("after_interval", None),
            ("immediate", Some(json!(5))),
            ("interval_1", Some(json!(5))),
            ("interval_2", Some(json!(5))),
            ("next_tick", Some(json!(5))),
            ("timeout", Some(json!(5))),
        ]
    );
    Ok(())
}

#[test]
fn test_zero_period_interval_fires_in_zone() -> anyhow::Result<()> {
    let c = child_zone();
    let log = Log::default();

    let main_log = Arc::clone(&log);
    EventLoop::new()?.run(async move {
        let log = Arc::clone(&main_log);
        let mut firings = 0;
        c.run(|| {
            set_interval(Duration::ZERO, move |timer| {
                firings += 1;
                record(&log, "tick");
                if firings == 3 {
                    timer.clear();
                }
            });
        });
    });

    assert_eq!(
        entries(&log),
        vec![
            ("tick", Some(json!(5))),
            ("tick", Some(json!(5))),
            ("tick", Some(json!(5)))
        ]
    );
    Ok(())
}

#[test]
fn test_unbounded_interval_can_be_cleared() -> anyhow::Result<()> {
    let log = Log::default();

    let main_log = Arc::clone(&log);
    EventLoop::new()?.run(async move {
        let log = Arc::clone(&main_log);
        let timer = set_interval(Duration::MAX, move |_| record(&log, "never"));
        let log = Arc::clone(&main_log);
        set_timeout(Duration::from_millis(1), move || {
            record(&log, "clearer");
            timer.clear();
        });
    });

    assert_eq!(entries(&log), vec![("clearer", None)]);
    Ok(())
}

#[test]
fn test_cleared_timeout_never_fires() -> anyhow::Result<()> {
    let c = child_zone();
    let log = Log::default();

    let main_log = Arc::clone(&log);
    EventLoop::new()?.run(async move {
        let timer = c.run(|| {
            let log = Arc::clone(&main_log);
            set_timeout(Duration::from_millis(20), move || record(&log, "cleared"))
        });
        let log = Arc::clone(&main_log);
        set_timeout(Duration::from_millis(1), move || {
            timer.clear();
            record(&log, "clearer");
        });
    });

    assert_eq!(entries(&log), vec![("clearer", None)]);
    Ok(())
}

#[test]
fn test_deferrals_from_root_stay_in_root() -> anyhow::Result<()> {
    let log = Log::default();

    let main_log = Arc::clone(&log);
    EventLoop::new()?.run(async move {
        let log = Arc::clone(&main_log);
        set_timeout(Duration::from_millis(1), move || {
            record(&log, "depth_1");
            let log = Arc::clone(&log);
            set_immediate(move || {
                record(&log, "depth_2");
                let log = Arc::clone(&log);
                next_tick(move || record(&log, "depth_3"));
            });
        });
    });

    assert_eq!(
        entries(&log),
        vec![("depth_1", None), ("depth_2", None), ("depth_3", None)]
    );
    Ok(())
}

#[test]
fn test_deferrals_from_zone_stay_in_zone() -> anyhow::Result<()> {
    let c = child_zone();
    let log = Log::default();

    let main_log = Arc::clone(&log);
    EventLoop::new()?.run(async move {
        let log = Arc::clone(&main_log);
        c.run(|| {
            set_timeout(Duration::from_millis(1), move || {
                record(&log, "depth_1");
                let log = Arc::clone(&log);
                set_immediate(move || {
                    record(&log, "depth_2");
                    let log = Arc::clone(&log);
                    next_tick(move || record(&log, "depth_3"));
                });
            });
        });
    });

    assert_eq!(
        entries(&log),
        vec![
            ("depth_1", Some(json!(5))),
            ("depth_2", Some(json!(5))),
            ("depth_3", Some(json!(5)))
        ]
    );
    Ok(())
}

#[test]
fn test_event_emitter_pattern() -> anyhow::Result<()> {
    let c = child_zone();
    let log = Log::default();

    let main_log = Arc::clone(&log);
    EventLoop::new()?.run(async move {
        let response = c.run(|| {
            let response = Rc::new(EventEmitter::<&'static str>::new());
            let log = Arc::clone(&main_log);
            response.on(move |event| record(&log, *event));
            response
        });

        // the "socket" delivers its events later, from the root zone
        set_timeout(Duration::from_millis(1), move || {
            response.emit(&"data");
            response.emit(&"end");
        });
    });

    assert_eq!(
        entries(&log),
        vec![("data", Some(json!(5))), ("end", Some(json!(5)))]
    );
    Ok(())
}

#[test]
fn test_stream_created_in_zone() -> anyhow::Result<()> {
    use tokio_stream::wrappers::UnboundedReceiverStream;
    use tokio_stream::StreamExt;

    let c = child_zone();
    let chunks = EventLoop::new()?.run(async move {
        let (sender, receiver) = tokio::sync::mpsc::unbounded_channel();
        let stream = c.run(|| {
            UnboundedReceiverStream::new(receiver)
                .map(|chunk: u8| (chunk, current_value("a")))
                .in_current_zone()
        });
        let consumer = spawn_local(stream.collect::<Vec<_>>());

        for chunk in [1, 2, 3] {
            sender.send(chunk).unwrap();
            tokio::task::yield_now().await;
        }
        drop(sender);
        consumer.await.unwrap()
    });

    assert_eq!(
        chunks,
        vec![(1, Some(json!(5))), (2, Some(json!(5))), (3, Some(json!(5)))]
    );
    Ok(())
}

#[test]
fn test_inherited_properties() -> anyhow::Result<()> {
    let c = child_zone();
    let seen = EventLoop::new()?.run(async move {
        let c2 = c.run(|| {
            Zone::current()
                .fork(ZoneSpec::new("test_zone").with_property("b", 6))
                .unwrap()
        });
        let sibling = Zone::root()
            .fork(ZoneSpec::new("sibling").with_property("s", 1))
            .unwrap();

        let task = c2.run(|| {
            spawn_local(async {
                tokio::task::yield_now().await;
                (
                    current_value("a"),
                    current_value("b"),
                    current_value("s"),
                )
            })
        });
        let sibling_task = sibling.run(|| spawn_local(async { (current_value("a"), current_value("b")) }));

        (task.await.unwrap(), sibling_task.await.unwrap())
    });

    assert_eq!(seen.0, (Some(json!(5)), Some(json!(6)), None));
    assert_eq!(seen.1, (None, None));
    Ok(())
}

#[test]
fn test_spawn_io_runs_work_and_callback_in_zone() -> anyhow::Result<()> {
    let c = child_zone();
    let log = Log::default();

    let main_log = Arc::clone(&log);
    EventLoop::new()?.run(async move {
        let log = Arc::clone(&main_log);
        c.run(|| {
            spawn_io(
                || current_value("a"),
                move |work_saw| {
                    log.lock().push(("work", work_saw.unwrap()));
                    record(&log, "completion");
                },
            );
        });
    });

    assert_eq!(
        entries(&log),
        vec![("completion", Some(json!(5))), ("work", Some(json!(5)))]
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_spawn_on_multi_thread_runtime() {
    let c = child_zone();
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let zone = if i % 2 == 0 { c.clone() } else { Zone::root() };
            zone.run(|| {
                spawn(async {
                    tokio::time::sleep(Duration::from_millis(2)).await;
                    tokio::task::yield_now().await;
                    current_value("a")
                })
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let expected = if i % 2 == 0 { Some(json!(5)) } else { None };
        assert_eq!(handle.await.unwrap(), expected);
    }
    assert_eq!(current_value("a"), None);
}
