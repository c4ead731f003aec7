pub mod application_card;
pub mod apply_modal;
pub mod credentials;
pub mod nav;
pub mod notices;
pub mod project_card;

/// Format an amount in Tunisian dinars
fn format_amount(amount: f64) -> String {
    format!("{amount} TND")
}
