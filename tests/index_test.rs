use unidoc::document::{CompositeTextField, Document};
use unidoc::error::UnidocError;
use unidoc::index::{
    FieldDict, INTERNAL_DOC_ID, IndexReader, SingleDocIndex, TermFieldDoc, TermFieldReader,
    TermFieldVector,
};

const ORIG_BLEVE_FIELD: &str = "There are three characteristics of liquids which are relevant to the discussion of a BLEVE:
If a liquid in a sealed container is boiled, the pressure inside the container increases. As the liquid changes to a gas it expands - this expansion in a vented container would cause the gas and liquid to take up more space. In a sealed container the gas and liquid are not able to take up more space and so the pressure rises. Pressurized vessels containing liquids can reach an equilibrium where the liquid stops boiling and the pressure stops rising. This occurs when no more heat is being added to the system (either because it has reached ambient temperature or has had a heat source removed).
The boiling temperature of a liquid is dependent on pressure - high pressures will yield high boiling temperatures, and low pressures will yield low boiling temperatures. A common simple experiment is to place a cup of water in a vacuum chamber, and then reduce the pressure in the chamber until the water boils. By reducing the pressure the water will boil even at room temperature. This works both ways - if the pressure is increased beyond normal atmospheric pressures, the boiling of hot water could be suppressed far beyond normal temperatures. The cooling system of a modern internal combustion engine is a real-world example.
When a liquid boils it turns into a gas. The resulting gas takes up far more space than the liquid did.
Typically, a BLEVE starts with a container of liquid which is held above its normal, atmospheric-pressure boiling temperature. Many substances normally stored as liquids, such as CO2, oxygen, and other similar industrial gases have boiling temperatures, at atmospheric pressure, far below room temperature. In the case of water, a BLEVE could occur if a pressurized chamber of water is heated far beyond the standard 100 °C (212 °F). That container, because the boiling water pressurizes it, is capable of holding liquid water at very high temperatures.
If the pressurized vessel, containing liquid at high temperature (which may be room temperature, depending on the substance) ruptures, the pressure which prevents the liquid from boiling is lost. If the rupture is catastrophic, where the vessel is immediately incapable of holding any pressure at all, then there suddenly exists a large mass of liquid which is at very high temperature and very low pressure. This causes the entire volume of liquid to instantaneously boil, which in turn causes an extremely rapid expansion. Depending on temperatures, pressures and the substance involved, that expansion may be so rapid that it can be classified as an explosion, fully capable of inflicting severe damage on its surroundings.";

fn large_bleve_field() -> String {
    ORIG_BLEVE_FIELD.replace([',', ':', '.'], "")
}

fn update_document(index: &mut SingleDocIndex, id: &str, fields: &[(&str, &str)]) {
    let mut builder = Document::builder(id);
    for (name, value) in fields {
        builder = builder.add_text(*name, *value);
    }
    let doc = builder.add_composite(CompositeTextField::all()).build();
    index.update(doc).unwrap();
}

fn bleve_index() -> SingleDocIndex {
    let mut index = SingleDocIndex::default();
    let body = large_bleve_field();
    update_document(&mut index, "bleve", &[("title", "Bleve"), ("body", body.as_str())]);
    index
}

fn assert_dict(mut dict: FieldDict<'_>, expected: &[&str]) {
    let terms = dict.collect_terms().unwrap();
    assert_eq!(terms, expected);
    assert!(dict.next().unwrap().is_none());
}

fn collect_postings(mut reader: TermFieldReader<'_>) -> Vec<TermFieldDoc> {
    let mut postings = Vec::new();
    while let Some(posting) = reader.next(None).unwrap() {
        postings.push(posting);
    }
    assert_eq!(postings.len() as u64, reader.count());
    postings
}

fn assert_empty_index(reader: &mut IndexReader<'_>) {
    assert_eq!(reader.doc_count().unwrap(), 0);

    let postings = reader
        .term_field_reader(b"b", "field", true, true, true)
        .unwrap();
    assert!(collect_postings(postings).is_empty());

    assert!(reader.doc_id_reader_all().unwrap().next().is_none());
    assert!(reader.doc_id_reader_only(&["a"]).unwrap().next().is_none());

    assert_dict(reader.field_dict("field").unwrap(), &[]);
    assert_dict(reader.field_dict_range("field", "a", "z").unwrap(), &[]);
    assert_dict(reader.field_dict_prefix("field", "b").unwrap(), &[]);
    assert_dict(reader.field_dict_regexp("field", "b.*").unwrap(), &[]);
    assert_dict(reader.field_dict_fuzzy("field", "b", 1, "").unwrap(), &[]);
    assert!(
        !reader
            .field_dict_contains("field")
            .unwrap()
            .contains(b"b")
            .unwrap()
    );

    assert!(matches!(
        reader.internal_id("a"),
        Err(UnidocError::DocIdMismatch(_))
    ));
    assert!(reader.external_id(INTERNAL_DOC_ID).is_err());
    assert!(reader.document("a").is_err());

    let mut visited = 0;
    reader
        .doc_value_reader(&["field"])
        .unwrap()
        .visit_doc_values(INTERNAL_DOC_ID, |_, _| visited += 1)
        .unwrap();
    assert_eq!(visited, 0);
}

#[test]
fn test_index_crud() {
    let mut index = SingleDocIndex::default();
    index.open().unwrap();

    update_document(
        &mut index,
        "a",
        &[
            ("name", "marty"),
            ("title", "software developer"),
            ("slogan", "code match"),
        ],
    );

    {
        let mut reader = index.reader();
        assert_eq!(reader.doc_count().unwrap(), 1);

        assert_dict(reader.field_dict("invalidfield").unwrap(), &[]);
        assert_dict(reader.field_dict("slogan").unwrap(), &["code", "match"]);

        let postings = reader
            .term_field_reader(b"marty", "invalidfield", true, true, true)
            .unwrap();
        assert!(collect_postings(postings).is_empty());

        let postings = reader
            .term_field_reader(b"marty", "name", true, true, true)
            .unwrap();
        assert_eq!(
            collect_postings(postings),
            vec![TermFieldDoc {
                term: "marty".to_string(),
                id: INTERNAL_DOC_ID.to_vec(),
                freq: 1,
                norm: 1.0,
                vectors: vec![TermFieldVector {
                    field: "name".to_string(),
                    array_positions: vec![],
                    pos: 1,
                    start: 0,
                    end: 5,
                }],
            }]
        );

        let ext_id = reader.external_id(INTERNAL_DOC_ID).unwrap();
        assert_eq!(ext_id, "a");
        assert_eq!(reader.internal_id(&ext_id).unwrap(), INTERNAL_DOC_ID);
    }

    update_document(
        &mut index,
        "b",
        &[("name", "tiger"), ("title", "zoo"), ("slogan", "golf match")],
    );

    {
        let reader = index.reader();
        let postings = reader
            .term_field_reader(b"marty", "name", true, true, true)
            .unwrap();
        assert!(collect_postings(postings).is_empty());

        let postings = reader
            .term_field_reader(b"tiger", "name", true, true, true)
            .unwrap();
        let postings = collect_postings(postings);
        assert_eq!(postings.len(), 1);
        assert_eq!(postings[0].term, "tiger");
        assert_eq!(postings[0].vectors[0].end, 5);

        assert_eq!(reader.external_id(INTERNAL_DOC_ID).unwrap(), "b");

        let mut all = reader.doc_id_reader_all().unwrap();
        assert_eq!(all.next(), Some(INTERNAL_DOC_ID));
        assert_eq!(all.next(), None);

        let mut only = reader.doc_id_reader_only(&["b"]).unwrap();
        assert_eq!(only.next(), Some(INTERNAL_DOC_ID));
        assert_eq!(only.next(), None);

        assert!(reader.doc_id_reader_only(&["c"]).unwrap().next().is_none());

        let mut only = reader.doc_id_reader_only(&["a", "b", "c"]).unwrap();
        assert_eq!(only.next(), Some(INTERNAL_DOC_ID));
        assert_eq!(only.next(), None);
    }

    update_document(
        &mut index,
        "c",
        &[
            ("name", "snake"),
            ("title", "college"),
            ("slogan", "the quick brown fox jumps over the lazy dog"),
        ],
    );

    {
        let mut reader = index.reader();

        assert_dict(reader.field_dict_prefix("invalidfield", "q").unwrap(), &[]);
        assert_dict(reader.field_dict_prefix("slogan", "q").unwrap(), &["quick"]);

        assert_dict(reader.field_dict_range("invalidfield", "a", "e").unwrap(), &[]);
        assert_dict(
            reader.field_dict_range("slogan", "a", "e").unwrap(),
            &["brown", "dog"],
        );

        assert_dict(reader.field_dict_regexp("invalidfield", "jum.*").unwrap(), &[]);
        assert_dict(reader.field_dict_regexp("slogan", "jum.*").unwrap(), &["jumps"]);

        assert_dict(reader.field_dict_fuzzy("invalidfield", "browm", 1, "").unwrap(), &[]);
        assert_dict(
            reader.field_dict_fuzzy("slogan", "browm", 1, "").unwrap(),
            &["brown"],
        );
        assert_dict(
            reader.field_dict_fuzzy("slogan", "braun", 2, "").unwrap(),
            &["brown"],
        );

        let contains = reader.field_dict_contains("slogan").unwrap();
        assert!(contains.contains(b"quick").unwrap());
        assert!(!contains.contains(b"quack").unwrap());

        let dvr = reader.doc_value_reader(&["slogan"]).unwrap();
        let mut seen = Vec::new();
        dvr.visit_doc_values(INTERNAL_DOC_ID, |field, term| {
            assert_eq!(field, "slogan");
            seen.push(String::from_utf8(term.to_vec()).unwrap());
        })
        .unwrap();
        seen.sort();
        assert_eq!(
            seen,
            vec!["brown", "dog", "fox", "jumps", "lazy", "over", "quick", "the"]
        );

        let mut fields = reader.fields().unwrap().to_vec();
        fields.sort();
        assert_eq!(fields, vec!["_all", "name", "slogan", "title"]);
    }

    index.set_internal(b"intk1", b"intv1").unwrap();
    {
        let reader = index.reader();
        assert_eq!(reader.get_internal(b"intk1").unwrap(), Some(&b"intv1"[..]));
    }
    index.delete_internal(b"intk1").unwrap();
    {
        let reader = index.reader();
        assert_eq!(reader.get_internal(b"intk1").unwrap(), None);
    }

    index.close().unwrap();
}

#[test]
fn test_empty() {
    let mut index = SingleDocIndex::default();
    assert_empty_index(&mut index.reader());

    update_document(&mut index, "a", &[("field", "b")]);
    assert_eq!(index.reader().doc_count().unwrap(), 1);

    index.delete("a").unwrap();
    assert_empty_index(&mut index.reader());
}

#[test]
fn test_field_without_terms() {
    let mut index = SingleDocIndex::default();
    index
        .update(Document::builder("a").add_text("field", "   ").build())
        .unwrap();

    let mut reader = index.reader();
    assert_eq!(reader.doc_count().unwrap(), 1);
    assert_eq!(reader.fields().unwrap(), &["field"]);
    assert_eq!(reader.internal_id("a").unwrap(), INTERNAL_DOC_ID);

    for _ in 0..2 {
        assert_dict(reader.field_dict("field").unwrap(), &[]);
    }
    assert_dict(reader.field_dict_range("field", "a", "z").unwrap(), &[]);
    assert_dict(reader.field_dict_prefix("field", "b").unwrap(), &[]);
    assert_dict(reader.field_dict_regexp("field", ".*").unwrap(), &[]);
    assert_dict(reader.field_dict_fuzzy("field", "b", 1, "").unwrap(), &[]);

    let postings = reader
        .term_field_reader(b"", "field", true, true, true)
        .unwrap();
    assert!(collect_postings(postings).is_empty());
    assert!(
        !reader
            .field_dict_contains("field")
            .unwrap()
            .contains(b"")
            .unwrap()
    );

    // An empty term list is never served from the cache.
    let stats = index.stats();
    assert_eq!(stats.cached_fields, 0);
    assert_eq!(stats.sorted_term_hits, 0);
    assert_eq!(stats.sorted_term_misses, 6);
}

#[test]
fn test_reset_to_document_without_fields() {
    let mut index = SingleDocIndex::default();
    update_document(&mut index, "a", &[("field", "b")]);
    assert_eq!(index.reader().doc_count().unwrap(), 1);

    index.update(Document::builder("a").build()).unwrap();
    let mut reader = index.reader();
    assert!(reader.fields().unwrap().is_empty());
    assert_empty_index(&mut reader);
    assert_eq!(index.stats().doc_count, 0);
}

#[test]
fn test_vector_only_document_counts() {
    let mut index = SingleDocIndex::default();
    index
        .update(Document::builder("a").add_vector("emb", vec![0.0; 3]).build())
        .unwrap();

    let reader = index.reader();
    assert_eq!(reader.doc_count().unwrap(), 1);
    assert_eq!(reader.fields().unwrap(), &["emb"]);
    assert_eq!(reader.internal_id("a").unwrap(), INTERNAL_DOC_ID);
    assert_eq!(reader.external_id(INTERNAL_DOC_ID).unwrap(), "a");
    assert_eq!(
        reader.doc_id_reader_only(&["a"]).unwrap().next(),
        Some(INTERNAL_DOC_ID)
    );
    assert!(reader.document("a").is_ok());
    assert_eq!(index.stats().doc_count, 1);
}

#[test]
fn test_delete_ignores_id() {
    let mut index = SingleDocIndex::default();
    update_document(&mut index, "a", &[("field", "b")]);

    index.delete("zzz").unwrap();
    let reader = index.reader();
    assert_eq!(reader.doc_count().unwrap(), 0);
    assert!(matches!(
        reader.document("a"),
        Err(UnidocError::DocIdMismatch(_))
    ));
}

#[test]
fn test_field_dict_range() {
    let mut index = bleve_index();
    let mut reader = index.reader();

    let tail = [
        "water", "ways", "when", "where", "which", "will", "with", "works", "would", "yield",
    ];
    assert_dict(reader.field_dict_range("body", "water", "yield").unwrap(), &tail);
    assert_dict(reader.field_dict_range("body", "water", "z").unwrap(), &tail);

    let head = [
        "a",
        "able",
        "above",
        "added",
        "all",
        "ambient",
        "an",
        "and",
        "any",
        "are",
        "as",
        "at",
        "atmospheric",
        "atmospheric-pressure",
    ];
    assert_dict(reader.field_dict_range("body", "a", "ball").unwrap(), &head);
    assert_dict(reader.field_dict_range("body", "_", "ball").unwrap(), &head);

    let middle = ["large", "liquid", "liquids", "lost", "low"];
    assert_dict(reader.field_dict_range("body", "large", "low").unwrap(), &middle);
    assert_dict(reader.field_dict_range("body", "l", "m").unwrap(), &middle);

    assert_dict(reader.field_dict_range("body", "m", "l").unwrap(), &[]);
}

#[test]
fn test_larger() {
    let mut index = bleve_index();
    let mut reader = index.reader();

    assert_dict(
        reader.field_dict_prefix("body", "b").unwrap(),
        &[
            "be", "because", "being", "below", "beyond", "bleve", "boil", "boiled", "boiling",
            "boils", "both", "by",
        ],
    );

    assert_dict(
        reader.field_dict_range("body", "water", "world").unwrap(),
        &[
            "water", "ways", "when", "where", "which", "will", "with", "works",
        ],
    );

    assert_dict(
        reader.field_dict_regexp("body", "li.*").unwrap(),
        &["liquid", "liquids"],
    );

    assert_dict(
        reader.field_dict_fuzzy("body", "gas", 2, "").unwrap(),
        &[
            "a", "an", "as", "at", "can", "case", "far", "gas", "gases", "had", "has", "is", "its",
            "mass", "may", "ways",
        ],
    );
}

#[test]
fn test_fuzzy_prefix_narrows_candidates() {
    let mut index = bleve_index();
    let mut reader = index.reader();

    assert_dict(
        reader.field_dict_fuzzy("body", "gas", 2, "ga").unwrap(),
        &["gas", "gases"],
    );
}

#[test]
fn test_multi_valued_field_counts() {
    let mut index = SingleDocIndex::default();
    let doc = Document::builder("bleve")
        .add_text("title", "Bleve")
        .add_text_values("body", ["one", "two", "three"])
        .add_composite(CompositeTextField::all())
        .build();
    index.update(doc).unwrap();

    let reader = index.reader();
    for term in ["one", "two", "three"] {
        let postings = reader
            .term_field_reader(term.as_bytes(), "body", false, false, false)
            .unwrap();
        assert_eq!(postings.count(), 1, "unexpected count for term {term}");
    }

    let postings = reader
        .term_field_reader(b"three", "body", true, true, true)
        .unwrap();
    let postings = collect_postings(postings);
    assert_eq!(postings[0].vectors[0].array_positions, vec![2]);
}

#[test]
fn test_unicode_regexp() {
    let mut index = SingleDocIndex::default();
    let doc = Document::builder("bleve")
        .add_text("title", "Bleve")
        .add_text_values("body", ["ko", "kó"])
        .add_composite(CompositeTextField::all())
        .build();
    index.update(doc).unwrap();

    let mut reader = index.reader();
    assert_dict(reader.field_dict_regexp("body", "k.*").unwrap(), &["ko", "kó"]);
}

#[test]
fn test_invalid_regexp_on_empty_index() {
    let mut index = SingleDocIndex::default();
    let mut reader = index.reader();
    assert!(matches!(
        reader.field_dict_regexp("body", "("),
        Err(UnidocError::UnsupportedPattern(_))
    ));
}

#[test]
fn test_composite_all_field() {
    let mut index = SingleDocIndex::default();
    let doc = Document::builder("a")
        .add_text("name", "marty")
        .add_text("title", "software developer")
        .add_id_field()
        .add_composite(CompositeTextField::all())
        .build();
    index.update(doc).unwrap();

    let mut reader = index.reader();
    assert_dict(
        reader.field_dict("_all").unwrap(),
        &["developer", "marty", "software"],
    );
    assert_dict(reader.field_dict("_id").unwrap(), &["a"]);

    let postings = reader
        .term_field_reader(b"developer", "_all", true, true, true)
        .unwrap();
    let postings = collect_postings(postings);
    assert_eq!(postings[0].norm, f64::from((1.0 / 3f64.sqrt()) as f32));
    assert_eq!(postings[0].vectors[0].field, "title");
}
