use crate::beans::BeanContext;

/// A hook that runs once, right after every bean has been constructed.
pub type StartupHook =
    Box<dyn FnOnce(&BeanContext) -> Result<(), Box<dyn std::error::Error + Send + Sync>> + Send>;

/// Run each hook once, in registration order. Stops at the first failure.
pub fn run_startup_hooks(
    hooks: Vec<StartupHook>,
    ctx: &BeanContext,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let count = hooks.len();
    for hook in hooks {
        hook(ctx)?;
    }
    tracing::debug!(count, "startup hooks completed");
    Ok(())
}

/// A startup hook that logs every bean's name and type.
///
/// When `enabled` is false the hook does nothing.
pub fn bean_inventory_printer(enabled: bool) -> StartupHook {
    Box::new(move |ctx: &BeanContext| {
        if !enabled {
            return Ok(());
        }
        tracing::info!(count = ctx.inventory().len(), "beans managed by the container");
        for bean in ctx.inventory() {
            tracing::info!(bean = %bean.name, r#type = bean.type_name, "bean");
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::beans::BeanRegistry;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn hooks_run_once_in_order() {
        let ctx = BeanRegistry::new().resolve().unwrap();
        let calls = Arc::new(AtomicUsize::new(0));

        let first = calls.clone();
        let second = calls.clone();
        let hooks: Vec<StartupHook> = vec![
            Box::new(move |_: &BeanContext| {
                assert_eq!(first.fetch_add(1, Ordering::SeqCst), 0);
                Ok(())
            }),
            Box::new(move |_: &BeanContext| {
                assert_eq!(second.fetch_add(1, Ordering::SeqCst), 1);
                Ok(())
            }),
        ];
        run_startup_hooks(hooks, &ctx).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn failing_hook_stops_the_chain() {
        let ctx = BeanRegistry::new().resolve().unwrap();
        let ran = Arc::new(AtomicUsize::new(0));
        let after = ran.clone();
        let hooks: Vec<StartupHook> = vec![
            Box::new(|_: &BeanContext| Err("boom".into())),
            Box::new(move |_: &BeanContext| {
                after.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }),
        ];
        let err = run_startup_hooks(hooks, &ctx).unwrap_err();
        assert_eq!(err.to_string(), "boom");
        assert_eq!(ran.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn inventory_printer_is_inert_when_disabled() {
        let mut reg = BeanRegistry::new();
        reg.provide(1u8);
        let ctx = reg.resolve().unwrap();
        assert!(bean_inventory_printer(false)(&ctx).is_ok());
        assert!(bean_inventory_printer(true)(&ctx).is_ok());
    }
}
