// SPDX-License-Identifier: GPL-3.0-or-later

//! XML response bodies shaped like real web service output.

pub const RADIOHEAD_MBID: &str = "a74b1b7f-71a5-4011-9441-d0b5e4122711";
pub const OK_COMPUTER_MBID: &str = "b1392450-e666-3926-a536-22c65f834433";

pub const SEARCH_ARTIST: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<metadata created="2014-06-14T19:37:07.292Z" xmlns="http://musicbrainz.org/ns/mmd-2.0#" xmlns:ext="http://musicbrainz.org/ns/ext#-2.0">
  <artist-list count="1" offset="0">
    <artist id="some-artist-id" type="Group" ext:score="100">
      <name>Gopher And Friends</name>
      <sort-name>0Gopher And Friends</sort-name>
      <country>DE</country>
      <disambiguation>Some crazy pocket gophers</disambiguation>
      <life-span>
        <begin>2007-09-21</begin>
        <ended>false</ended>
      </life-span>
      <alias-list>
        <alias sort-name="0Mr. Gopher and Friends">Mr. Gopher and Friends</alias>
        <alias sort-name="0Mr Gopher and Friends">Mr Gopher and Friends</alias>
      </alias-list>
    </artist>
  </artist-list>
</metadata>"#;

pub const SEARCH_RELEASE: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<metadata created="2014-06-14T19:37:07.292Z" xmlns="http://musicbrainz.org/ns/mmd-2.0#" xmlns:ext="http://musicbrainz.org/ns/ext#-2.0">
  <release-list count="1" offset="0">
    <release id="9ab1b03e-6722-4ab8-bc7f-a8722f0d34c1" ext:score="100">
      <title>Fred Schneider &amp; The Shake Society</title>
      <status>official</status>
      <text-representation>
        <language>eng</language>
        <script>latn</script>
      </text-representation>
      <artist-credit>
        <name-credit>
          <artist id="43bcca8b-9edc-4997-8343-122350e790bf">
            <name>Fred Schneider</name>
            <sort-name>Schneider, Fred</sort-name>
          </artist>
        </name-credit>
      </artist-credit>
      <release-group type="Album"/>
      <date>1991-04-30</date>
      <country>us</country>
      <barcode>075992659222</barcode>
      <asin>075992659222</asin>
      <label-info-list>
        <label-info>
          <catalog-number>9 26592-2</catalog-number>
          <label>
            <name>Reprise Records</name>
          </label>
        </label-info>
      </label-info-list>
      <medium-list>
        <medium>
          <format>cd</format>
          <disc-list count="1"/>
          <track-list count="10"/>
        </medium>
      </medium-list>
    </release>
  </release-list>
</metadata>"#;

pub const SEARCH_RELEASE_GROUP: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<metadata created="2014-06-14T19:37:07.292Z" xmlns="http://musicbrainz.org/ns/mmd-2.0#" xmlns:ext="http://musicbrainz.org/ns/ext#-2.0">
  <release-group-list count="1" offset="0">
    <release-group id="70664047-2545-4e46-b75f-4556f2a7b83e" type="Single" ext:score="100">
      <title>Main Tenance</title>
      <primary-type>Single</primary-type>
      <artist-credit>
        <name-credit>
          <artist id="a8fa58d8-f60b-4b83-be7c-aea1af11596b">
            <name>Fred Giannelli</name>
            <sort-name>Giannelli, Fred</sort-name>
            <disambiguation>US electronic artist</disambiguation>
          </artist>
        </name-credit>
      </artist-credit>
      <release-list count="1">
        <release id="9168f4cc-a852-4ba5-bf85-602996625651">
          <title>Main Tenance</title>
        </release>
      </release-list>
    </release-group>
  </release-group-list>
</metadata>"#;

pub const SEARCH_LABEL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<metadata xmlns="http://musicbrainz.org/ns/mmd-2.0#" xmlns:ext="http://musicbrainz.org/ns/ext#-2.0">
  <label-list count="1" offset="0">
    <label id="c4f2e1f8-1ab4-4a2f-8c4c-2a1f3b4d5e6f" type="Original Production" ext:score="100">
      <name>Reprise Records</name>
      <sort-name>Reprise Records</sort-name>
      <label-code>1015</label-code>
      <country>US</country>
      <life-span><begin>1960</begin></life-span>
    </label>
  </label-list>
</metadata>"#;

pub const SEARCH_RECORDING: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<metadata xmlns="http://musicbrainz.org/ns/mmd-2.0#" xmlns:ext="http://musicbrainz.org/ns/ext#-2.0">
  <recording-list count="1" offset="0">
    <recording id="e5a3f0c4-1fae-4f2e-8f76-0c3b4f1e4fa6" ext:score="100">
      <title>Paranoid Android</title>
      <length>387000</length>
      <artist-credit>
        <name-credit>
          <artist id="a74b1b7f-71a5-4011-9441-d0b5e4122711">
            <name>Radiohead</name>
            <sort-name>Radiohead</sort-name>
          </artist>
        </name-credit>
      </artist-credit>
      <release-list>
        <release id="b1392450-e666-3926-a536-22c65f834433">
          <title>OK Computer</title>
          <status>Official</status>
          <date>1997-05-21</date>
        </release>
      </release-list>
    </recording>
  </recording-list>
</metadata>"#;

pub const SEARCH_WORK: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<metadata xmlns="http://musicbrainz.org/ns/mmd-2.0#" xmlns:ext="http://musicbrainz.org/ns/ext#-2.0">
  <work-list count="1" offset="0">
    <work id="0f4b6b4c-2b62-3f6e-ae1d-7d0c1b8b2b2e" type="Song" ext:score="100">
      <title>Paranoid Android</title>
      <language>eng</language>
      <iswc-list><iswc>T-010.475.727-8</iswc></iswc-list>
    </work>
  </work-list>
</metadata>"#;

pub const SEARCH_ANNOTATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<metadata xmlns="http://musicbrainz.org/ns/mmd-2.0#" xmlns:ext="http://musicbrainz.org/ns/ext#-2.0">
  <annotation-list count="1" offset="0">
    <annotation type="release" ext:score="100">
      <entity>bdb24cb5-404b-4f60-bba4-7b730325ae47</entity>
      <name>Pieds nus sur la braise</name>
      <text>Lyrics and music by Merzhin except on track 6.</text>
    </annotation>
  </annotation-list>
</metadata>"#;

pub const LOOKUP_ARTIST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<metadata xmlns="http://musicbrainz.org/ns/mmd-2.0#">
  <artist id="a74b1b7f-71a5-4011-9441-d0b5e4122711" type="Group">
    <name>Radiohead</name>
    <sort-name>Radiohead</sort-name>
    <country>GB</country>
    <life-span><begin>1991</begin></life-span>
  </artist>
</metadata>"#;

/// Artist browse/search page with the given counters and artist ids.
pub fn artist_list(count: u32, offset: u32, ids: &[&str]) -> String {
    let artists: String = ids
        .iter()
        .map(|id| format!(r#"<artist id="{id}"><name>{id}</name></artist>"#))
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<metadata xmlns="http://musicbrainz.org/ns/mmd-2.0#" xmlns:ext="http://musicbrainz.org/ns/ext#-2.0"><artist-list count="{count}" offset="{offset}">{artists}</artist-list></metadata>"#
    )
}
