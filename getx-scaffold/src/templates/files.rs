//! Template file contents
//!
//! Rendered with `page_name`, `class_name`, `title` and `extension` in scope.

/// View template: a `GetView` bound to the page's logic controller
pub const VIEW_TEMPLATE: &str = r"import 'package:flutter/material.dart';
import 'package:get/get.dart';
import '{{ page_name }}_logic.{{ extension }}';

class {{ class_name }}View extends GetView<{{ class_name }}Logic> {
  const {{ class_name }}View({super.key});

  @override
  Widget build(BuildContext context) {
    return Scaffold(
      appBar: AppBar(title: Text('{{ title }}')),
      body: const Center(child: Text('{{ class_name }} View')),
    );
  }
}
";

/// Binding template: registers the logic controller lazily
pub const BINDING_TEMPLATE: &str = r"import 'package:get/get.dart';
import '{{ page_name }}_logic.{{ extension }}';

class {{ class_name }}Binding extends Bindings {
  @override
  void dependencies() {
    Get.lazyPut(() => {{ class_name }}Logic());
  }
}
";

/// Logic template: a `GetxController` owning the page state
pub const LOGIC_TEMPLATE: &str = r"import 'package:get/get.dart';
import '{{ page_name }}_state.{{ extension }}';

class {{ class_name }}Logic extends GetxController {
  final {{ class_name }}State state = {{ class_name }}State();

  @override
  void onReady() {
    // TODO: implement onReady
    super.onReady();
  }

  @override
  void onClose() {
    // TODO: implement onClose
    super.onClose();
  }
}
";

/// State template: plain holder for page variables
pub const STATE_TEMPLATE: &str = r"
class {{ class_name }}State {
  {{ class_name }}State() {
    ///Initialize variables
  }
}
";
