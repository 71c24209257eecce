//! Built-in demo capabilities and their handlers.
//!
//! Front ends use this set when no catalog is configured. The handlers only
//! format a confirmation string; nothing is actually sent or transferred.

use crate::capability::Capability;
use crate::intent::Intent;
use crate::registry::IntentRegistry;
use crate::solver::Solver;

pub const SEND_NOTIFICATION: &str = "send_notification";
pub const TRANSFER_TOKENS: &str = "transfer_tokens";
pub const SWAP_TOKENS: &str = "swap_tokens";

/// The three built-in capabilities, in registration order.
pub fn builtin_capabilities() -> Vec<Capability> {
    vec![
        Capability::new(SEND_NOTIFICATION, ["notify", "message"], ["to", "text"]),
        Capability::new(TRANSFER_TOKENS, ["transfer", "payment"], ["to", "amount"]),
        Capability::new(
            SWAP_TOKENS,
            ["swap", "trade"],
            ["from_token", "to_token", "amount"],
        ),
    ]
}

pub fn builtin_registry() -> IntentRegistry {
    IntentRegistry::from_capabilities(builtin_capabilities())
}

/// Registry and handlers for the built-in set.
pub fn builtin_solver() -> Solver {
    let mut solver = Solver::new(builtin_registry());
    register_builtin_handlers(&mut solver);
    solver
}

/// Bind the built-in handlers on `solver`, whatever its registry holds.
pub fn register_builtin_handlers(solver: &mut Solver) {
    solver.register_handler(SEND_NOTIFICATION, send_notification);
    solver.register_handler(TRANSFER_TOKENS, transfer_tokens);
    solver.register_handler(SWAP_TOKENS, swap_tokens);
}

fn send_notification(intent: &Intent) -> String {
    format!(
        "Notification to {}: {}",
        intent.param_text("to"),
        intent.param_text("text")
    )
}

fn transfer_tokens(intent: &Intent) -> String {
    format!(
        "Transferred {} to {} (demo)",
        intent.param_text("amount"),
        intent.param_text("to")
    )
}

fn swap_tokens(intent: &Intent) -> String {
    format!(
        "Swapped {} {} -> {} (demo)",
        intent.param_text("amount"),
        intent.param_text("from_token"),
        intent.param_text("to_token")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_order_is_stable() {
        let names: Vec<String> = builtin_capabilities()
            .into_iter()
            .map(|cap| cap.name.0)
            .collect();
        assert_eq!(names, vec![SEND_NOTIFICATION, TRANSFER_TOKENS, SWAP_TOKENS]);
    }

    #[test]
    fn every_builtin_capability_has_a_handler() {
        let solver = builtin_solver();
        for capability in solver.registry().list_capabilities() {
            assert!(solver.has_handler(capability.name.as_str()));
        }
    }

    #[test]
    fn swap_handler_formats_tokens() {
        let solver = builtin_solver();
        let intent = Intent::new("swap")
            .with_tags(["swap", "trade"])
            .with_param("from_token", "ETH")
            .with_param("to_token", "USDC")
            .with_param("amount", 2.5);
        assert_eq!(
            solver.solve(&intent).as_deref(),
            Some("Swapped 2.5 ETH -> USDC (demo)")
        );
    }

    #[test]
    fn handler_renders_missing_params_as_none() {
        let solver = builtin_solver();
        let intent = Intent::new("notify").with_tags(["notify"]).with_param("to", "bob");
        assert_eq!(
            solver.solve(&intent).as_deref(),
            Some("Notification to bob: None")
        );
    }
}
