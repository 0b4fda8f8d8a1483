//! Benchmarks for the TEI parsing and Leiden+ rendering pipeline.
//!
//! Run with: cargo bench

use criterion::{Criterion, criterion_group, criterion_main};

use epidoc::dom::parse;
use epidoc::{CitationLookup, Inscription, render_edition};

/// A representative inscription exercising most constructs.
const INSCRIPTION: &str = r#"<TEI xmlns="http://www.tei-c.org/ns/1.0">
  <teiHeader>
    <fileDesc>
      <titleStmt><title xml:lang="en">Benchmark inscription</title></titleStmt>
      <publicationStmt><idno type="filename">BENCH01</idno></publicationStmt>
    </fileDesc>
  </teiHeader>
  <text>
    <body>
      <div type="edition" xml:lang="grc">
        <ab>
          <lb/><g type="cross"/>ΑΓΑΘΗΙ <unclear>ΤΥΧΗΙ</unclear>
          <lb/><supplied reason="lost">ΑΥΤΟΚΡΑΤΩΡ <expan><abbr>ΚΑΙΣ</abbr><ex>ΑΡ</ex></expan></supplied>
          <lb/>Α<gap unit="character" quantity="4"/>Β<gap unit="character" atLeast="2" atMost="5"/>
          <lb/><del rend="erasure">ΓΕΤΑΣ</del><space unit="character" quantity="2"/>
          <lb/><choice><corr>ΚΕ</corr><sic>ΚΑΙ</sic></choice><add place="above">ΧΡ</add>
          <lb/><hi rend="supraline">ΙΣ</hi><surplus>Σ</surplus><note>sic</note>
          <lb/><gap unit="line" quantity="3"/>
        </ab>
      </div>
      <div type="translation">
        <seg xml:lang="en">To good fortune. The emperor Caesar...</seg>
      </div>
      <div type="bibliography">
        <bibl sameAs="bib:Ref1">45</bibl>
      </div>
    </body>
  </text>
</TEI>"#;

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_inscription", |b| {
        b.iter(|| Inscription::parse(std::hint::black_box(INSCRIPTION)).unwrap())
    });
}

fn bench_render_edition(c: &mut Criterion) {
    let inscription = Inscription::parse(INSCRIPTION).unwrap();
    let edition = inscription.body_div("edition").unwrap();

    c.bench_function("render_edition", |b| {
        b.iter(|| render_edition(std::hint::black_box(edition)))
    });
}

fn bench_full_record(c: &mut Criterion) {
    let inscription = Inscription::parse(INSCRIPTION).unwrap();
    let lookup = CitationLookup::from_document(
        &parse(r#"<listBibl><biblStruct xml:id="Ref1"><monogr><title xml:lang="en">Corpus</title><imprint><date>1964</date></imprint></monogr></biblStruct></listBibl>"#).unwrap(),
        "en",
    );

    c.bench_function("render_full_record", |b| {
        b.iter(|| inscription.render("en", std::hint::black_box(&lookup)))
    });
}

criterion_group!(benches, bench_parse, bench_render_edition, bench_full_record);
criterion_main!(benches);
