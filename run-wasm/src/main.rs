fn main() {
    cargo_run_wasm::run_wasm_with_css(
        r#"
        body {
            margin: 0px;
            font-family: sans-serif;
        }
        .fade {
            opacity: 0;
            transform: translateY(2rem);
            transition: opacity 0.6s ease-out, transform 0.6s ease-out;
        }
        .fade.visible {
            opacity: 1;
            transform: none;
        }
        "#,
    );
}
