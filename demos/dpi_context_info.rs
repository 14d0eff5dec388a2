use dpi_context::{DpiAwarenessContext, DpiContextAccessor, DpiFunction};

fn main() {
    let accessor = DpiContextAccessor::platform();

    for function in DpiFunction::ALL {
        println!("{:<32} {}", function.name(), accessor.is_function_available(function));
    }

    println!("thread context: {:?}", accessor.try_get_thread_dpi_awareness_context());

    match accessor.enter_thread_dpi_scope(DpiAwarenessContext::PER_MONITOR_AWARE_V2) {
        Ok(scope) => {
            let current = accessor.try_get_thread_dpi_awareness_context();
            let is_v2 = accessor.try_are_dpi_awareness_contexts_equal(
                current,
                Some(DpiAwarenessContext::PER_MONITOR_AWARE_V2),
            );
            println!("inside scope: {:?} (per monitor v2: {})", current, is_v2);
            drop(scope);
        }
        Err(err) => eprintln!("could not enter scope: {}", err),
    }

    println!("restored: {:?}", accessor.try_get_thread_dpi_awareness_context());
}
