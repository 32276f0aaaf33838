use asynczone::prelude::*;
use std::rc::Rc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

// Request-scoped values, flattened into zone properties
#[derive(Debug, Clone, Properties)]
#[properties(rename_all = "camel")]
struct RequestContext {
    request_id: u64,
    #[property(rename = "user")]
    user_name: String,
    #[property(skip)]
    _started: std::time::Instant,
}

fn log_context(step: &str) {
    info!(
        step,
        zone = %Zone::current(),
        request_id = ?current_value("requestId"),
        user = ?current_value("user"),
        "Callback ran"
    );
}

fn handle_request(request_id: u64, user: &str) -> anyhow::Result<Rc<EventEmitter<String>>> {
    let context = RequestContext {
        request_id,
        user_name: user.to_string(),
        _started: std::time::Instant::now(),
    };
    let zone = Zone::current().fork(ZoneSpec::new("request").with_properties(context))?;

    let socket = zone.run(|| {
        log_context("accepted");

        set_timeout(Duration::from_millis(10 * request_id), move || {
            log_context("timeout");
            next_tick(|| log_context("next_tick"));
        });

        read_metadata(".", |stat| {
            log_context("io");
            if let Err(err) = stat {
                tracing::warn!(error = %err, "Stat failed");
            }
        });

        let (promise, resolver) = Promise::<u64>::pending();
        promise.then(|n| {
            log_context("promise");
            n
        });
        set_immediate(move || {
            resolver.resolve(request_id);
        });

        let socket = Rc::new(EventEmitter::<String>::new());
        socket.on(|chunk| {
            log_context("data");
            info!(chunk = %chunk, "Socket chunk");
        });
        socket
    });
    Ok(socket)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    EventLoop::new()?.run(async {
        for (request_id, user) in [(1, "ada"), (2, "grace")] {
            let socket = handle_request(request_id, user)?;
            // chunks arrive from the root zone, listeners still see the request
            set_timeout(Duration::from_millis(5), move || {
                socket.emit(&format!("hello from request {request_id}"));
            });
        }
        log_context("main");

        match Zone::root().run_guarded(|| ()) {
            Ok(()) => info!("run_guarded is supported"),
            Err(err) => info!(error = %err, "Expected failure"),
        }
        anyhow::Ok(())
    })?;

    info!(
        live_resources = LifecycleBridge::global().live_resources(),
        faults = LifecycleBridge::global().consistency_faults(),
        "Event loop drained"
    );
    Ok(())
}
