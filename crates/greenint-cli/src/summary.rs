use std::time::Duration;

use console::Style;
use greenint_core::config::IntegrationConfig;
use greenint_core::integrate::{CalculationRequest, CalculationResult, IntegrationMode};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    expr: Style,
    error: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            expr: Style::new().green(),
            error: Style::new().red().bold(),
        }
    }
}

pub fn print_integration_summary(
    request: &CalculationRequest,
    config: &IntegrationConfig,
    result: &CalculationResult,
    elapsed: Duration,
) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Double Integral"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(15)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Mode"),
        s.value.apply_to(request.mode)
    );
    if request.mode == IntegrationMode::VectorField {
        println!(
            "  {:<14}{}",
            s.label.apply_to("P(x, y)"),
            s.expr.apply_to(&request.field_p)
        );
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Q(x, y)"),
        s.expr.apply_to(&request.field_q)
    );
    println!();

    println!("  {}", s.header.apply_to("Region"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("y from"),
        s.expr.apply_to(&request.curves.lower)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("y to"),
        s.expr.apply_to(&request.curves.upper)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("x in"),
        s.value
            .apply_to(format!("[{}, {}]", request.x_range.min, request.x_range.max))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Step"),
        s.value.apply_to(config.step)
    );
    println!();

    match result {
        CalculationResult::Success(v) => {
            println!("  {}", s.header.apply_to("Result"));
            println!(
                "    {:<12}{}",
                s.label.apply_to("Value"),
                s.value.apply_to(v.formatted_value())
            );
            println!(
                "    {:<12}{}",
                s.label.apply_to("Integral"),
                s.expr.apply_to(&v.expression_label)
            );
            println!(
                "    {:<12}{}",
                s.label.apply_to("Samples"),
                s.value.apply_to(v.samples)
            );
        }
        CalculationResult::Failure { kind, message } => {
            println!("  {}", s.header.apply_to("Result"));
            println!(
                "    {:<12}{}",
                s.label.apply_to(kind),
                s.error.apply_to(message)
            );
        }
    }
    println!(
        "    {:<12}{}",
        s.label.apply_to("Time"),
        s.value.apply_to(format!("{:.2?}", elapsed))
    );
    println!();
}
