use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use propscrub::{from_xml_str, scrub_str};

const CLEAN_XML: &str = r#"<variants><group><variant file="a.asset" frequency="100"><props><prop actor="crate"/></props></variant></group></variants>"#;

fn dirty_xml(groups: usize) -> String {
    let mut xml = String::from("<variants>");
    for i in 0..groups {
        xml.push_str(&format!(
            "<group name=\"g{i}\"><variant frequency=\"100\"><props>\
             <prop actor=\"Blood_{i}\"/><prop actor=\"lamp_{i}\"/></props></variant>\
             <variant><props><prop actor=\"blood_pool\"/></props><textures/></variant></group>"
        ));
    }
    xml.push_str("</variants>");
    xml
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("propscrub_parse_clean", |b| {
        b.iter(|| from_xml_str(black_box(CLEAN_XML)))
    });
}

fn bench_scrub(c: &mut Criterion) {
    let dirty = dirty_xml(200);
    c.bench_function("propscrub_scrub_clean", |b| {
        b.iter(|| scrub_str(black_box(CLEAN_XML)))
    });
    c.bench_function("propscrub_scrub_dirty_200_groups", |b| {
        b.iter(|| scrub_str(black_box(&dirty)))
    });
}

criterion_group!(benches, bench_parse, bench_scrub);
criterion_main!(benches);
