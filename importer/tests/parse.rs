use importer::record::{RecordError, Side};
use importer::ParseError;
use pretty_assertions::assert_eq;
use tracing_test::traced_test;

#[test]
#[traced_test]
fn parses_an_exported_sheet() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../testfiles/two_games.csv");
    let input_bytes = std::fs::read(path).unwrap();

    let games = importer::parse(&input_bytes).unwrap();

    assert_eq!(2, games.len());

    let first = &games[0];
    assert_eq!("team alpha", first.team_a);
    assert_eq!("team bravo", first.team_b);
    assert_eq!(Some(Side::TeamA), first.winner);
    assert_eq!("domination", first.game_mode);
    assert_eq!("Krakoa", first.map);
    assert_eq!(1, first.round);
    assert_eq!(3, first.medals.len());
    assert_eq!(12, first.players.len());
    assert_eq!("Alpha_Anna", first.players[0].gamertag);
    assert_eq!("iron man", first.players[0].hero);
    assert_eq!(18, first.players[0].kills);

    let second = &games[1];
    assert_eq!(Some(Side::TeamB), second.winner);
    assert_eq!("convoy", second.game_mode);
    assert_eq!("Midtown", second.map);
    assert_eq!(2, second.round);
    assert_eq!(1, second.medals.len());
    assert_eq!("Bravo_Ben", second.medals[0].gamertag);
    assert_eq!("cloak & dagger", second.players[10].hero);
}

#[test]
fn empty_sheet_has_no_games() {
    assert_eq!(Ok(Vec::new()), importer::parse(b""));
}

#[test]
fn rejects_non_text_input() {
    assert_eq!(Err(ParseError::NotText), importer::parse(&[0xff, 0xfe, 0x00]));
}

#[test]
#[traced_test]
fn rejects_a_sheet_with_a_short_roster() {
    let mut sheet = String::from(",Team Alpha,Team Bravo,Team Alpha,domination,Krakoa,1,,,\n");
    for i in 0..11 {
        sheet.push_str(&format!("p{},1,2,3,4,500,60,70,50,Hulk\n", i));
    }

    let result = importer::parse(sheet.as_bytes());

    assert_eq!(
        Err(ParseError::Record(RecordError::PlayerCount {
            expected: 12,
            found: 11,
            line: 1,
        })),
        result
    );
}

#[test]
fn rejects_a_sheet_ending_in_a_bare_header() {
    let mut sheet = String::from(",Team Alpha,Team Bravo,Team Alpha,domination,Krakoa,1,,,\n");
    for i in 0..12 {
        sheet.push_str(&format!("p{},1,2,3,4,500,60,70,50,Hulk\n", i));
    }
    sheet.push_str(",Team Charlie,Team Delta,Team Charlie,convoy,Midtown,2,,,\n");

    let result = importer::parse(sheet.as_bytes());

    assert_eq!(
        Err(ParseError::Format(importer::SegmentError::EmptyGame {
            line: 14,
        })),
        result
    );
}

#[test]
fn crlf_sheets_parse_the_same() {
    let mut sheet = String::from(",Team Alpha,Team Bravo,,domination,Krakoa,1,,,\r\n");
    for i in 0..12 {
        sheet.push_str(&format!("p{},1,2,3,4,500,60,70,50,Hulk\r\n", i));
    }

    let games = importer::parse(sheet.as_bytes()).unwrap();

    assert_eq!(1, games.len());
    assert_eq!(None, games[0].winner);
    assert_eq!("hulk", games[0].players[11].hero);
}
