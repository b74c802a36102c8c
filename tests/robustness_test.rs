use rs_block_importer::dom;
use rs_block_importer::{import, import_bytes, import_with_options, Error, Options};

const URL: &str = "https://www.example.com/section/page.html";

#[test]
fn invalid_url_is_rejected() {
    for url in ["", "not a url", "/relative/path.html"] {
        match import("<p>x</p>", url) {
            Err(Error::InvalidUrl(got)) => assert!(got.starts_with(url), "{got}"),
            other => panic!("expected InvalidUrl for {url:?}, got {other:?}"),
        }
    }
}

#[test]
fn output_paths() {
    let cases = [
        ("https://www.example.com/products/photoshop.html", "/products/photoshop"),
        ("https://www.example.com/products/index.html", "/products"),
        ("https://www.example.com/products/", "/products"),
        ("https://www.example.com/", "/index"),
        ("https://www.example.com/a/b.htm?x=1#top", "/a/b"),
    ];
    for (url, expected) in cases {
        let result = import("<p>x</p>", url).expect("import");
        assert_eq!(result.output_path, expected, "url {url}");
    }
}

#[test]
fn empty_and_fragment_inputs_do_not_fail() {
    for html in ["", "   ", "<p>just a paragraph", "<div><span>unclosed", "<html><body></body></html>"] {
        let result = import(html, URL).expect("import");
        assert!(result.report.extracted_form_ids.is_empty());
        assert!(result.report.extracted_widget_ids.is_empty());
    }
}

#[test]
fn deeply_nested_containers_are_handled() {
    let depth = 200;
    let mut html = String::from("<body>");
    for _ in 0..depth {
        html.push_str(r#"<div class="dexter-FlexContainer-Items"><p>side</p>"#);
    }
    for _ in 0..depth {
        html.push_str("</div>");
    }
    html.push_str("</body>");

    let result = import(&html, URL).expect("import");
    let root = dom::body(&result.document).expect("body");
    let top = dom::element_children(&root);
    assert_eq!(top.len(), 1);
    assert_eq!(dom::tag_name(&top[0]).as_deref(), Some("table"));
}

#[test]
fn existing_tables_are_left_alone() {
    let html = r#"<body><table><tr><td>
        <div class="dexter-FlexContainer-Items"><p>a</p><p>b</p></div>
    </td></tr></table></body>"#;
    let result = import(html, URL).expect("import");
    assert_eq!(result.document.select("table").length(), 1);
    assert_eq!(result.document.select(".dexter-FlexContainer-Items").length(), 1);
}

#[test]
fn disabled_stages_keep_markup() {
    let html = r#"<body>
        <form id="f"></form>
        <p><img class="dexter-LazyImage" src="/icons/photoshop.svg"></p>
    </body>"#;
    let options = Options {
        extract_widgets: false,
        replace_icons: false,
        include_metadata: false,
        ..Options::default()
    };
    let result = import_with_options(html, URL, &options).expect("import");
    let root = dom::body(&result.document).expect("body");

    assert!(dom::select_first(&root, "form").is_some());
    assert!(dom::select_first(&root, "img").is_some());
    assert!(result.report.extracted_form_ids.is_empty());
}

#[test]
fn custom_chrome_selectors_replace_defaults() {
    let html = r#"<body><header>kept</header><aside class="promo">gone</aside></body>"#;
    let options = Options {
        chrome_selectors: vec![".promo".to_string(), "[[bad".to_string()],
        ..Options::default()
    };
    let result = import_with_options(html, URL, &options).expect("import");
    let root = dom::body(&result.document).expect("body");

    assert!(dom::select_first(&root, "header").is_some());
    assert!(dom::select_first(&root, ".promo").is_none());
    assert!(result.warnings.iter().any(|w| w.contains("[[bad")));
}

#[test]
fn latin1_bytes_are_transcoded() {
    let html = b"<html><head><meta charset=\"windows-1252\"><title>Caf\xE9</title></head><body><p>x</p></body></html>";
    let result = import_bytes(html, URL, &Options::default()).expect("import");
    assert_eq!(result.metadata.title.as_deref(), Some("Café"));
}

#[test]
fn unusable_original_url_falls_back_with_warning() {
    let html = r#"<body><div class="container"><video class="video-desktop"><source src="/v.mp4"></video></div></body>"#;
    let options = Options {
        original_url: Some("::nope::".to_string()),
        ..Options::default()
    };
    let result = import_with_options(html, URL, &options).expect("import");
    let root = dom::body(&result.document).expect("body");

    assert_eq!(result.warnings.len(), 1);
    let link = dom::select_first(&root, "a").expect("video link");
    assert_eq!(
        dom::attr(&link, "href").as_deref(),
        Some("https://www.example.com/v.mp4")
    );
}
