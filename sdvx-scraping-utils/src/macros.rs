/// Compiles a CSS selector once and hands out a `&'static Selector`.
///
/// Panics on the first use if the selector literal is invalid.
#[macro_export]
macro_rules! selector {
    ($e: expr) => {{
        use $crate::once_cell::sync::Lazy;
        use $crate::scraper::Selector;
        static SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse($e).unwrap());
        &*SELECTOR
    }};
}

#[cfg(test)]
mod tests {
    use scraper::Html;

    #[test]
    fn selector_is_reused() {
        let html = Html::parse_fragment(r#"<div class="music"><p>a</p><p>b</p></div>"#);
        let first = selector!("div.music p");
        assert_eq!(html.select(first).count(), 2);
        let again = (0..2).map(|_| selector!("div.music") as *const _).collect::<Vec<_>>();
        assert_eq!(again[0], again[1]);
    }
}
