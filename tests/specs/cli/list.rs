// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `sv list` specs: catalog display without execution.

use crate::prelude::*;

fn sample(temp: &Project) {
    temp.file(
        "guide.org",
        "* Maps\n\
         #+begin_src go :imports fmt\n\
         fmt.Println(1)\n\
         #+end_src\n\
         \n\
         #+RESULTS:\n\
         : 1\n\
         \n\
         ** Iteration\n\
         #+begin_src go\n\
         fmt.Println(2)\n\
         #+end_src\n\
         \n\
         #+begin_src sh :no-capture\n\
         rm -rf /tmp/scratch\n\
         #+end_src\n",
    );
}

#[test]
fn lists_documents_and_heading_groups() {
    let temp = Project::empty();
    sample(&temp);

    temp.sv()
        .args(&["list"])
        .passes()
        .stdout_has("guide.org (3 snippets,")
        .stdout_has("  Maps")
        .stdout_has("  Maps/Iteration");
}

#[test]
fn marks_snippet_roles_without_running_anything() {
    let temp = Project::empty();
    sample(&temp);

    temp.sv()
        .args(&["list"])
        .passes()
        .stdout_has("#1 go [checked]")
        .stdout_has("#1 go [informational]")
        .stdout_has("#2 sh [no-capture]");
}

#[test]
fn json_listing_serializes_the_catalog() {
    let temp = Project::empty();
    sample(&temp);

    let out = temp.sv().args(&["list", "--output", "json"]).passes();
    let json = out.json();
    let doc = &json["documents"][0];
    assert_eq!(doc["snippets"].as_array().unwrap().len(), 3);
    assert_eq!(doc["snippets"][0]["lang"], "go");
    assert_eq!(doc["snippets"][0]["imports"][0], "fmt");
    assert_eq!(doc["snippets"][2]["capture"], false);
    assert!(doc["hash"].as_str().unwrap().len() == 64);
}

#[test]
fn parse_failure_is_reported_and_fails() {
    let temp = Project::empty();
    sample(&temp);
    temp.file("bad.org", "#+begin_src sh\necho never closed\n");

    temp.sv()
        .args(&["list"])
        .fails()
        .stdout_has("PARSE bad.org: unterminated source block opened at line 1");
}

#[test]
fn missing_documents_are_fatal() {
    let temp = Project::empty();
    temp.sv()
        .args(&["list"])
        .exit_code(2)
        .stderr_has("no documents found");
}
