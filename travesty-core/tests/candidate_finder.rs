use travesty_core::Order;
use travesty_core::model::candidates::{BOUNDARY, CandidateFinder, Scanner, find_candidates};
use travesty_core::model::corpus::Corpus;
use travesty_core::model::follow_table::FollowTable;

fn occurrences(corpus: &[u8], prefix: &[u8]) -> Vec<usize> {
	(0..=corpus.len() - prefix.len()).filter(|&p| &corpus[p..p + prefix.len()] == prefix).collect()
}

#[test]
fn overlap_yields_three_candidates_with_boundary_space() {
	let candidates = find_candidates(b"aaaa", b"aa");
	assert_eq!(candidates, vec![b'a', b'a', BOUNDARY]);
}

#[test]
fn one_candidate_per_occurrence() {
	let corpus = b"she sells sea shells by the sea shore ";
	for prefix in [&b"se"[..], b"he", b"sea", b"s ", b"ll", b"e "] {
		let found = find_candidates(corpus, prefix);
		let positions = occurrences(corpus, prefix);
		assert_eq!(found.len(), positions.len(), "prefix {:?}", prefix);
		for (c, p) in found.iter().zip(positions) {
			assert_eq!(*c, corpus.get(p + prefix.len()).copied().unwrap_or(BOUNDARY));
		}
	}
}

#[test]
fn tail_match_is_substituted() {
	// the only "re" is at the very end
	assert_eq!(find_candidates(b"shore", b"re"), vec![BOUNDARY]);
}

#[test]
fn scanner_and_table_agree_everywhere() {
	let corpus = Corpus::from_words("it was the best of times it was the worst of times".split(' '));
	for n in [2, 3, 4, 7] {
		let order = Order::new(n).unwrap();
		let table = FollowTable::build(&corpus, order);
		let scanner = Scanner::new(&corpus);
		for p in 0..=corpus.len() - n {
			let prefix = corpus.window(p, order);
			assert_eq!(table.candidates(prefix), scanner.candidates(prefix));
		}
		let unseen = vec![b'#'; n];
		assert!(table.candidates(&unseen).is_empty());
		assert!(scanner.candidates(&unseen).is_empty());
	}
}
