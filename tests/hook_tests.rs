// Registered hooks are process-wide, so this binary holds a single test.
use asynczone::prelude::*;
use mockall::mock;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

mock! {
    pub RecordingHook {}
    impl AsyncHook for RecordingHook {
        fn on_resource_created(&self, id: AsyncId, kind: ResourceKind, trigger_id: AsyncId);
        fn on_before_invocation(&self, id: AsyncId);
        fn on_resource_destroyed(&self, id: AsyncId);
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Created(AsyncId, ResourceKind, AsyncId),
    Before(AsyncId),
    Destroyed(AsyncId),
}

#[test]
fn test_lifecycle_events_reach_registered_hooks() -> anyhow::Result<()> {
    let events = Arc::new(Mutex::new(Vec::new()));

    let mut hook = MockRecordingHook::new();
    let log = Arc::clone(&events);
    hook.expect_on_resource_created()
        .returning(move |id, kind, trigger| log.lock().push(Event::Created(id, kind, trigger)));
    let log = Arc::clone(&events);
    hook.expect_on_before_invocation()
        .returning(move |id| log.lock().push(Event::Before(id)));
    let log = Arc::clone(&events);
    hook.expect_on_resource_destroyed()
        .returning(move |id| log.lock().push(Event::Destroyed(id)));
    register_hook(Arc::new(hook));

    let main_id = EventLoop::new()?.run(async {
        let main_id = execution_async_id();
        set_timeout(Duration::from_millis(1), || {});
        spawn_local(async { tokio::task::yield_now().await })
            .await
            .unwrap();
        main_id
    });

    let events = events.lock().clone();
    assert!(matches!(
        events.first(),
        Some(Event::Created(id, ResourceKind::Main, TOP_LEVEL_ASYNC_ID)) if *id == main_id
    ));

    let children: Vec<(AsyncId, ResourceKind)> = events
        .iter()
        .filter_map(|event| match event {
            Event::Created(id, kind, trigger) if *trigger == main_id => Some((*id, kind.clone())),
            _ => None,
        })
        .collect();
    assert!(children.iter().any(|(_, kind)| *kind == ResourceKind::Timeout));
    assert!(children.iter().any(|(_, kind)| *kind == ResourceKind::Task));

    for id in std::iter::once(main_id).chain(children.iter().map(|(id, _)| *id)) {
        let positions = |wanted: fn(&Event, AsyncId) -> bool| -> Vec<usize> {
            events
                .iter()
                .enumerate()
                .filter(|(_, event)| wanted(event, id))
                .map(|(index, _)| index)
                .collect()
        };
        let created = positions(|event, id| matches!(event, Event::Created(c, _, _) if *c == id));
        let before = positions(|event, id| *event == Event::Before(id));
        let destroyed = positions(|event, id| *event == Event::Destroyed(id));

        assert_eq!(created.len(), 1, "resource {id} created once");
        assert_eq!(destroyed.len(), 1, "resource {id} destroyed once");
        assert!(!before.is_empty(), "resource {id} was invoked");
        assert!(before.iter().all(|b| created[0] < *b && *b < destroyed[0]));
    }
    Ok(())
}
