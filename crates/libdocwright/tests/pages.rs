//! Integration tests covering page layout: overview groups, frames, module
//! directories and the user-supplied header and footer fragments.
#![allow(clippy::tests_outside_test_module)]

mod utils;

use libdocwright::{Configuration, Group};
use serde_json::json;
use utils::*;

fn library() -> libdocwright::Model {
    let mut list = interface("java.util", "List");
    list["members"] = json!([
        { "name": "size", "kind": "method", "signature": "()" },
        { "name": "EMPTY", "kind": "field" }
    ]);
    model(json!({
        "modules": [{ "name": "java.base", "summary": "Foundational APIs." }],
        "packages": [
            { "name": "java.util", "module": "java.base" },
            { "name": "java.io", "module": "java.base" },
            { "name": "org.acme", "module": "java.base" }
        ],
        "types": [
            list,
            class("java.io", "File"),
            class("org.acme", "Widget"),
        ]
    }))
}

fn grouped() -> Configuration {
    Configuration::new()
        .with_group(Group::new("Core", ["java.util"]))
        .with_group(Group::new("Input", ["java.io*"]))
}

gen_page_tests!(layout, {
    page {
        overview_groups_become_tabs: {
            model: library(),
            config: grouped(),
            page: "overview-summary.html",
            contains: [">All Packages</button>", ">Core</button>", ">Input</button>", ">Other Packages</button>"],
            omits: ["<div class=\"caption\">"]
        }
    }
    page {
        overview_without_groups_has_caption: {
            model: library(),
            config: Configuration::new(),
            page: "overview-summary.html",
            contains: ["<div class=\"caption\"><span>Packages</span></div>", "java/util/package-summary.html"],
            omits: ["table-tabs", "all-modules-table"]
        }
    }
    page {
        doc_title_heads_the_overview: {
            model: library(),
            config: Configuration::new().with_doc_title("Acme <em>API</em>"),
            page: "overview-summary.html",
            contains: ["<h1 class=\"title\">Acme <em>API</em></h1>"],
            omits: []
        }
    }
    page {
        window_title_suffixes_page_titles: {
            model: library(),
            config: Configuration::new().with_window_title("Acme"),
            page: "java/util/List.html",
            contains: ["<title>List (Acme)</title>"],
            omits: []
        }
    }
    page {
        charset_lands_in_meta_tag: {
            model: library(),
            config: Configuration::new().with_charset("ISO-8859-1"),
            page: "java/io/package-summary.html",
            contains: ["<meta charset=\"ISO-8859-1\">"],
            omits: []
        }
    }
    page {
        doc_root_resolves_relative_to_page: {
            model: library(),
            config: Configuration::new()
                .with_top("<a href=\"{@docRoot}/legal.html\">Legal</a>")
                .with_bottom("<a href=\"{@docRoot}/copyright.html\">Copyright</a>"),
            page: "java/util/List.html",
            contains: ["href=\"../../legal.html\"", "href=\"../../copyright.html\""],
            omits: ["{@docRoot}"]
        }
    }
    page {
        doc_root_at_the_root_is_dot: {
            model: library(),
            config: Configuration::new().with_top("<a href=\"{@docRoot}/legal.html\">Legal</a>"),
            page: "overview-summary.html",
            contains: ["href=\"./legal.html\""],
            omits: []
        }
    }
    page {
        footer_falls_back_to_header: {
            model: library(),
            config: Configuration::new().with_header("<b>Acme</b>"),
            page: "overview-summary.html",
            contains: ["<div class=\"about-language\"><b>Acme</b></div>"],
            omits: []
        }
    }
    page {
        type_page_anchors_members: {
            model: library(),
            config: Configuration::new(),
            page: "java/util/List.html",
            contains: ["id=\"size()\"", "id=\"EMPTY\"", "href=\"../../java/util/package-summary.html\""],
            omits: []
        }
    }
    page {
        frames_index_is_a_frameset: {
            model: library(),
            config: Configuration::new().with_frames(true),
            page: "index.html",
            contains: ["<frame src=\"overview-frame.html\"", "<frame src=\"allclasses-frame.html\"", "Non-frame version"],
            omits: ["Refresh"]
        }
    }
    page {
        index_redirects_without_frames: {
            model: library(),
            config: Configuration::new(),
            page: "index.html",
            contains: ["http-equiv=\"Refresh\"", "content=\"0;overview-summary.html\""],
            omits: ["frameset"]
        }
    }
    page {
        package_frame_marks_interfaces: {
            model: library(),
            config: Configuration::new().with_frames(true),
            page: "java/util/package-frame.html",
            contains: ["<span class=\"interface-name\">List</span>", "target=\"classFrame\""],
            omits: []
        }
    }
    page {
        modules_get_their_own_directories: {
            model: library(),
            config: Configuration::new().with_show_modules(true),
            page: "java.base/java/util/List.html",
            contains: ["href=\"../../../java.base/module-summary.html\"", "href=\"../../../stylesheet.css\""],
            omits: []
        }
    }
    page {
        overview_lists_modules_when_shown: {
            model: library(),
            config: Configuration::new().with_show_modules(true),
            page: "overview-summary.html",
            contains: ["all-modules-table", "href=\"java.base/module-summary.html\"", "Foundational APIs."],
            omits: []
        }
    }
    page {
        module_page_lists_its_packages: {
            model: library(),
            config: Configuration::new().with_show_modules(true),
            page: "java.base/module-summary.html",
            contains: ["Module java.base", "href=\"../java.base/java/io/package-summary.html\""],
            omits: []
        }
    }
});
